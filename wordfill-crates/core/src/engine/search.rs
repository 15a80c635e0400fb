use log::trace;

use super::consistency::ArcConsistency;
use super::consistency::DirectedArc;
use super::consistency::EmptyDomain;
use super::termination::TerminationCondition;
use super::validator;
use super::ConstraintGraph;
use super::DomainStore;
use super::PartialAssignment;
use super::SolverStatistics;
use super::VariableId;
use crate::basic_types::Random;
use crate::basic_types::WordId;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::model::Puzzle;
use crate::wordfill_assert_advanced;
use crate::wordfill_assert_simple;

/// How a [`Search`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    /// Every slot holds a word.
    Solved,
    /// Every candidate of the first slot was tried without success.
    Exhausted,
    /// The termination condition fired before the search could conclude.
    Stopped,
}

/// Depth-first backtracking over the slots of a puzzle.
///
/// The search places one word at a time and only ever places a word which agrees with every word
/// placed so far. If arc consistency is maintained, the domains are pruned after every placement
/// and the pruning is undone when the placement is retracted.
pub(crate) struct Search<'a> {
    puzzle: &'a dyn Puzzle,
    graph: &'a ConstraintGraph,
    domains: DomainStore,
    assignment: PartialAssignment,
    arc_consistency: &'a mut ArcConsistency,
    random: &'a mut dyn Random,
    statistics: &'a mut SolverStatistics,
    maintain_arc_consistency: bool,
}

impl<'a> Search<'a> {
    #[allow(clippy::too_many_arguments, reason = "the search borrows every part of the solver")]
    pub(crate) fn new(
        puzzle: &'a dyn Puzzle,
        graph: &'a ConstraintGraph,
        domains: DomainStore,
        arc_consistency: &'a mut ArcConsistency,
        random: &'a mut dyn Random,
        statistics: &'a mut SolverStatistics,
        maintain_arc_consistency: bool,
    ) -> Search<'a> {
        Search {
            puzzle,
            graph,
            domains,
            assignment: PartialAssignment::new(graph),
            arc_consistency,
            random,
            statistics,
            maintain_arc_consistency,
        }
    }

    pub(crate) fn run(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchStatus {
        self.backtrack(brancher, termination)
    }

    /// The words placed by the search; complete if [`Search::run`] returned
    /// [`SearchStatus::Solved`].
    pub(crate) fn assignment(&self) -> &PartialAssignment {
        &self.assignment
    }

    fn backtrack(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchStatus {
        let (variable, candidates) = {
            let mut context = SelectionContext::new(
                self.graph,
                &self.domains,
                &self.assignment,
                &mut *self.random,
            );

            let Some(variable) = brancher.select_variable(&mut context) else {
                wordfill_assert_simple!(
                    self.assignment.is_complete(),
                    "The brancher did not select a slot while some slots are still empty"
                );
                return SearchStatus::Solved;
            };
            let candidates = brancher.order_values(&mut context, variable);

            (variable, candidates)
        };

        for word in candidates {
            if termination.should_stop() {
                return SearchStatus::Stopped;
            }

            let is_consistent =
                validator::is_consistent_extension(self.graph, &self.assignment, variable, word);
            wordfill_assert_advanced!(
                is_consistent == self.extension_is_consistent(variable, word),
                "The incremental check disagrees with the full check for {variable}"
            );
            if !is_consistent {
                self.statistics.num_failed_consistency_checks += 1;
                continue;
            }

            trace!(
                "Placing {} in {}",
                self.graph.word(word),
                self.graph.variable(variable)
            );
            termination.decision_has_been_made();
            self.statistics.num_decisions += 1;
            self.assignment.assign(variable, word);
            self.statistics.peak_depth = self
                .statistics
                .peak_depth
                .max(self.assignment.num_assigned() as u64);

            let status = if self.maintain_arc_consistency {
                self.decide_and_propagate(variable, word, brancher, termination)
            } else {
                self.backtrack(brancher, termination)
            };

            match status {
                SearchStatus::Solved | SearchStatus::Stopped => return status,
                SearchStatus::Exhausted => {
                    let _ = self.assignment.unassign(variable);
                    self.statistics.num_backtracks += 1;
                    brancher.on_backtrack(variable, word);
                }
            }
        }

        SearchStatus::Exhausted
    }

    /// Opens a decision level, prunes the domains for `word` in `variable` and continues the
    /// search. The level is closed again unless a solution was found.
    fn decide_and_propagate(
        &mut self,
        variable: VariableId,
        word: WordId,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchStatus {
        let level = self.domains.get_decision_level();
        self.domains.increase_decision_level();

        let status = match self.propagate(variable, word) {
            Ok(()) => self.backtrack(brancher, termination),
            Err(EmptyDomain { variable: emptied }) => {
                trace!(
                    "Placing {} in {} leaves no words for {}",
                    self.graph.word(word),
                    self.graph.variable(variable),
                    self.graph.variable(emptied)
                );
                self.statistics.num_inference_conflicts += 1;
                SearchStatus::Exhausted
            }
        };

        if status != SearchStatus::Solved {
            self.domains.synchronise(level);
        }
        status
    }

    /// Reduces the domain of `variable` to `word`, removes `word` from the domains of the empty
    /// slots and restores arc consistency from the slots whose domain changed.
    fn propagate(&mut self, variable: VariableId, word: WordId) -> Result<(), EmptyDomain> {
        wordfill_assert_simple!(self.domains.contains(variable, word));

        let others = self
            .domains
            .domain(variable)
            .iter()
            .copied()
            .filter(|&other| other != word)
            .collect::<Vec<_>>();
        for other in others {
            let _ = self.domains.remove(variable, other);
        }

        let mut arcs = self
            .graph
            .neighbours(variable)
            .iter()
            .map(|&(neighbour, _)| DirectedArc::new(neighbour, variable))
            .collect::<Vec<_>>();

        for other_variable in self.graph.variable_ids() {
            if self.assignment.is_assigned(other_variable)
                || !self.domains.remove(other_variable, word)
            {
                continue;
            }

            if self.domains.is_empty(other_variable) {
                return Err(EmptyDomain {
                    variable: other_variable,
                });
            }
            arcs.extend(
                self.graph
                    .neighbours(other_variable)
                    .iter()
                    .map(|&(neighbour, _)| DirectedArc::new(neighbour, other_variable)),
            );
        }

        self.arc_consistency
            .enforce(self.graph, &mut self.domains, Some(&arcs))
    }

    /// The full check of the assignment extended with `word` in `variable`.
    fn extension_is_consistent(&self, variable: VariableId, word: WordId) -> bool {
        let mut extended = self.assignment.to_assignment(self.graph);
        let _ = extended.insert(self.graph.variable(variable), self.graph.word(word).clone());

        validator::is_consistent(self.puzzle, &extended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::branching::branchers::DefaultBrancher;
    use crate::engine::termination::decision_budget::DecisionBudget;
    use crate::engine::termination::indefinite::Indefinite;
    use crate::model::Direction;
    use crate::model::Overlap;
    use crate::model::SlotGraph;
    use crate::model::Variable;

    /// Two across slots crossed by one down slot in their first cells.
    fn ladder(words: &[&str]) -> SlotGraph {
        let top = Variable::new(0, 0, Direction::Across, 3);
        let bottom = Variable::new(2, 0, Direction::Across, 3);
        let down = Variable::new(0, 0, Direction::Down, 3);

        SlotGraph::new(
            [top, bottom, down],
            words,
            [(top, down, Overlap(0, 0)), (bottom, down, Overlap(0, 2))],
        )
        .expect("valid puzzle")
    }

    fn run(
        puzzle: &SlotGraph,
        maintain_arc_consistency: bool,
        termination: &mut impl TerminationCondition,
    ) -> (SearchStatus, usize, SolverStatistics) {
        let graph = ConstraintGraph::new(puzzle);
        let domains = DomainStore::initialise(&graph);
        let mut arc_consistency = ArcConsistency::default();
        let mut random = TestRandom::default();
        let mut statistics = SolverStatistics::default();

        let mut search = Search::new(
            puzzle,
            &graph,
            domains,
            &mut arc_consistency,
            &mut random,
            &mut statistics,
            maintain_arc_consistency,
        );
        let status = search.run(&mut DefaultBrancher::default(), termination);
        let num_assigned = search.assignment().num_assigned();

        (status, num_assigned, statistics)
    }

    #[test]
    fn fills_every_slot_of_a_solvable_puzzle() {
        let puzzle = ladder(&["CAT", "TOE", "COT", "DOG"]);

        for maintain_arc_consistency in [false, true] {
            let (status, num_assigned, _) = run(&puzzle, maintain_arc_consistency, &mut Indefinite);

            assert_eq!(status, SearchStatus::Solved);
            assert_eq!(num_assigned, 3);
        }
    }

    #[test]
    fn exhausts_an_unsolvable_puzzle() {
        // The down slot needs a word starting and ending with a first letter of an across word
        let puzzle = ladder(&["CAT", "DOG", "EWE"]);

        for maintain_arc_consistency in [false, true] {
            let (status, num_assigned, statistics) =
                run(&puzzle, maintain_arc_consistency, &mut Indefinite);

            assert_eq!(status, SearchStatus::Exhausted);
            assert_eq!(num_assigned, 0);
            assert_eq!(statistics.num_decisions, statistics.num_backtracks);
        }
    }

    #[test]
    fn stops_when_the_termination_condition_fires() {
        let puzzle = ladder(&["CAT", "TOE", "COT", "DOG"]);

        let (status, _, statistics) = run(&puzzle, false, &mut DecisionBudget::new(1));

        assert_eq!(status, SearchStatus::Stopped);
        assert_eq!(statistics.num_decisions, 1);
    }

    #[test]
    fn a_puzzle_without_slots_is_solved_immediately() {
        let puzzle = SlotGraph::new([], ["CAT"], []).expect("valid puzzle");

        let (status, num_assigned, statistics) = run(&puzzle, false, &mut DecisionBudget::new(0));

        assert_eq!(status, SearchStatus::Solved);
        assert_eq!(num_assigned, 0);
        assert_eq!(statistics.num_decisions, 0);
    }
}
