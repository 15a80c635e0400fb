use super::ConstraintGraph;
use super::VariableId;
use crate::basic_types::Trail;
use crate::basic_types::WordId;
use crate::containers::KeyedVec;
use crate::containers::SparseSet;
use crate::containers::StorageKey;

/// Records the size of a domain before a word was removed from it, so that the removal can be
/// undone when backtracking.
#[derive(Clone, Copy, Debug)]
struct DomainChange {
    variable: VariableId,
    previous_size: usize,
}

/// The candidate words of every slot.
///
/// Domains only shrink, either through [`DomainStore::remove`] or through arc consistency.
/// Removals made after [`DomainStore::increase_decision_level`] are recorded on a trail and are
/// undone by [`DomainStore::synchronise`]; removals at the root level are permanent.
#[derive(Clone, Debug, Default)]
pub struct DomainStore {
    domains: KeyedVec<VariableId, SparseSet<WordId>>,
    trail: Trail<DomainChange>,
}

impl DomainStore {
    /// Gives every slot the words of the vocabulary whose length equals the length of the slot.
    pub fn initialise(graph: &ConstraintGraph) -> DomainStore {
        let domains = graph
            .variable_ids()
            .map(|variable| {
                let length = graph.variable(variable).length;
                let words = graph
                    .word_ids()
                    .filter(|&word| graph.word(word).len() == length)
                    .collect::<Vec<_>>();

                SparseSet::new(words, graph.num_words(), WordId::index)
            })
            .collect();

        DomainStore {
            domains,
            trail: Trail::default(),
        }
    }

    /// The words which are still candidates for `variable`, in no particular order.
    pub fn domain(&self, variable: VariableId) -> &[WordId] {
        self.domains[variable].as_slice()
    }

    pub fn size(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    pub fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    pub fn contains(&self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable].contains(&word)
    }

    /// Removes `word` from the domain of `variable`; returns whether the word was a candidate.
    pub fn remove(&mut self, variable: VariableId, word: WordId) -> bool {
        let previous_size = self.domains[variable].len();
        let removed = self.domains[variable].remove(&word);

        if removed && self.trail.get_decision_level() > 0 {
            self.trail.push(DomainChange {
                variable,
                previous_size,
            });
        }

        removed
    }

    pub fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    /// Restores every domain to its state when `decision_level` was the current level.
    pub fn synchronise(&mut self, decision_level: usize) {
        for change in self.trail.synchronise(decision_level) {
            self.domains[change.variable].restore(change.previous_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;
    use crate::model::SlotGraph;
    use crate::model::Variable;

    fn graph() -> ConstraintGraph {
        let puzzle = SlotGraph::new(
            [
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 0, Direction::Down, 2),
            ],
            ["CAT", "DOG", "AT", "BEAR", "OX"],
            [],
        )
        .expect("valid puzzle");

        ConstraintGraph::new(&puzzle)
    }

    fn sorted(words: &[WordId]) -> Vec<u32> {
        let mut ids = words.iter().map(|word| word.id).collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[test]
    fn domains_only_contain_words_of_matching_length() {
        let graph = graph();
        let domains = DomainStore::initialise(&graph);

        assert_eq!(sorted(domains.domain(VariableId::new(0))), vec![0, 1]);
        assert_eq!(sorted(domains.domain(VariableId::new(1))), vec![2, 4]);
    }

    #[test]
    fn removal_reports_whether_the_word_was_present() {
        let graph = graph();
        let mut domains = DomainStore::initialise(&graph);
        let x = VariableId::new(0);

        assert!(domains.remove(x, WordId { id: 1 }));
        assert!(!domains.remove(x, WordId { id: 1 }));
        assert!(!domains.remove(x, WordId { id: 3 }));
        assert_eq!(domains.size(x), 1);
        assert!(!domains.contains(x, WordId { id: 1 }));
    }

    #[test]
    fn synchronising_restores_exactly_the_removed_words() {
        let graph = graph();
        let mut domains = DomainStore::initialise(&graph);
        let x = VariableId::new(0);
        let y = VariableId::new(1);

        let _ = domains.remove(y, WordId { id: 2 });

        domains.increase_decision_level();
        let _ = domains.remove(x, WordId { id: 0 });
        domains.increase_decision_level();
        let _ = domains.remove(x, WordId { id: 1 });
        let _ = domains.remove(y, WordId { id: 4 });
        assert!(domains.is_empty(x));
        assert!(domains.is_empty(y));

        domains.synchronise(1);
        assert_eq!(sorted(domains.domain(x)), vec![1]);
        assert_eq!(sorted(domains.domain(y)), vec![4]);

        domains.synchronise(0);
        assert_eq!(sorted(domains.domain(x)), vec![0, 1]);
        assert_eq!(sorted(domains.domain(y)), vec![4]);
        assert_eq!(domains.get_decision_level(), 0);
    }
}
