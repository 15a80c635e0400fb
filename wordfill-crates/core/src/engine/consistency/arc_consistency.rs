use log::debug;
use log::trace;
use thiserror::Error;

use super::arc_queue::ArcQueue;
use super::DirectedArc;
use crate::basic_types::HashSet;
use crate::create_statistics_struct;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::VariableId;
use crate::wordfill_assert_simple;

create_statistics_struct!(
    /// Statistics on the pruning done by [`ArcConsistency`].
    ArcConsistencyStatistics {
        /// The number of arcs which were revised
        num_revisions: u64,
        /// The number of words removed from the domains
        num_pruned_words: u64,
        /// The number of times a domain became empty
        num_wipe_outs: u64,
});

/// Indicates that enforcing arc consistency removed every word from the domain of `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the domain of {variable} is empty")]
pub struct EmptyDomain {
    pub variable: VariableId,
}

/// Enforces arc consistency on the domains of a [`ConstraintGraph`] using AC-3 \[1\].
///
/// An arc `(x, y)` with overlap `(ix, iy)` is consistent when every word `w` in the domain of `x`
/// has a word `w'` in the domain of `y` with `w[ix] == w'[iy]`. Running [`ArcConsistency::enforce`]
/// either makes every arc consistent or reports the first domain which became empty.
///
/// The worklist is kept between calls so that its memory is reused during search.
///
/// # Bibliography
/// \[1\] A. K. Mackworth, ‘Consistency in networks of relations’, Artificial Intelligence, vol. 8,
/// no. 1, pp. 99–118, 1977.
#[derive(Debug, Default)]
pub struct ArcConsistency {
    queue: ArcQueue,
    statistics: ArcConsistencyStatistics,
}

impl ArcConsistency {
    /// Removes from the domain of `x` every word which disagrees, in the cell shared with `y`, with
    /// all words in the domain of `y`. Returns whether a word was removed.
    ///
    /// If `x` and `y` do not share a cell then nothing happens.
    ///
    /// # Example
    /// ```rust
    /// # use wordfill_core::model::Direction;
    /// # use wordfill_core::model::Overlap;
    /// # use wordfill_core::model::SlotGraph;
    /// # use wordfill_core::model::Variable;
    /// # use wordfill_core::domains::ArcConsistency;
    /// # use wordfill_core::domains::ConstraintGraph;
    /// # use wordfill_core::domains::DomainStore;
    /// let x = Variable::new(0, 0, Direction::Across, 3);
    /// let y = Variable::new(0, 2, Direction::Down, 3);
    /// let puzzle = SlotGraph::new([x, y], ["CAT", "APE", "TOP"], [(x, y, Overlap(2, 0))])
    ///     .expect("a well-formed puzzle");
    ///
    /// let graph = ConstraintGraph::new(&puzzle);
    /// let mut domains = DomainStore::initialise(&graph);
    /// let x = graph.id_of(x).expect("x is part of the puzzle");
    /// let y = graph.id_of(y).expect("y is part of the puzzle");
    ///
    /// // Only "CAT" ends with a letter with which one of the words starts
    /// let mut arc_consistency = ArcConsistency::default();
    /// assert!(arc_consistency.revise(&graph, &mut domains, x, y));
    /// assert_eq!(domains.size(x), 1);
    /// ```
    pub fn revise(
        &mut self,
        graph: &ConstraintGraph,
        domains: &mut DomainStore,
        x: VariableId,
        y: VariableId,
    ) -> bool {
        let Some(overlap) = graph.overlap(x, y) else {
            return false;
        };
        self.statistics.num_revisions += 1;

        let supported_letters = domains
            .domain(y)
            .iter()
            .map(|&word| graph.word(word).letter(overlap.1))
            .collect::<HashSet<_>>();

        let unsupported = domains
            .domain(x)
            .iter()
            .copied()
            .filter(|&word| !supported_letters.contains(&graph.word(word).letter(overlap.0)))
            .collect::<Vec<_>>();

        for &word in unsupported.iter() {
            let removed = domains.remove(x, word);
            wordfill_assert_simple!(removed);
        }

        self.statistics.num_pruned_words += unsupported.len() as u64;
        !unsupported.is_empty()
    }

    /// Runs AC-3 starting from `arcs`, or from every arc of the graph when `arcs` is [`None`].
    ///
    /// Whenever the domain of `x` shrinks while revising `(x, y)`, the arcs `(z, x)` for every
    /// other neighbour `z` of `x` are revisited. Returns `Ok(())` only once the worklist has been
    /// drained; returns [`EmptyDomain`] as soon as a domain becomes empty, in which case other
    /// arcs may not have been revised.
    pub fn enforce(
        &mut self,
        graph: &ConstraintGraph,
        domains: &mut DomainStore,
        arcs: Option<&[DirectedArc]>,
    ) -> Result<(), EmptyDomain> {
        self.queue.clear();
        match arcs {
            Some(arcs) => arcs.iter().for_each(|&arc| {
                let _ = self.queue.enqueue(arc);
            }),
            None => graph.arcs().for_each(|(x, y)| {
                let _ = self.queue.enqueue(DirectedArc::new(x, y));
            }),
        }
        trace!("Enforcing arc consistency from {} arcs", self.queue.len());

        while let Some(DirectedArc { x, y }) = self.queue.pop() {
            if !self.revise(graph, domains, x, y) {
                continue;
            }

            if domains.is_empty(x) {
                debug!("Arc consistency emptied the domain of {}", graph.variable(x));
                self.statistics.num_wipe_outs += 1;
                self.queue.clear();
                return Err(EmptyDomain { variable: x });
            }

            for &(z, _) in graph.neighbours(x) {
                if z != y {
                    let _ = self.queue.enqueue(DirectedArc::new(z, x));
                }
            }
        }

        wordfill_assert_simple!(self.queue.is_empty());
        Ok(())
    }

    pub(crate) fn statistics(&self) -> ArcConsistencyStatistics {
        self.statistics
    }
}
