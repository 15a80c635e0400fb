use crate::basic_types::Random;
use crate::basic_types::Word;
use crate::basic_types::WordId;
#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::PartialAssignment;
use crate::engine::VariableId;
use crate::model::Overlap;
use crate::model::Variable;

/// The context provided to the [`Brancher`]; it gives read access to the slots, their current
/// domains and the words placed so far.
///
/// It is only mutable to account for the usage of random generators (see [`Random`]).
#[derive(Debug)]
pub struct SelectionContext<'a> {
    graph: &'a ConstraintGraph,
    domains: &'a DomainStore,
    assignment: &'a PartialAssignment,
    random_generator: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        graph: &'a ConstraintGraph,
        domains: &'a DomainStore,
        assignment: &'a PartialAssignment,
        rng: &'a mut dyn Random,
    ) -> Self {
        SelectionContext {
            graph,
            domains,
            assignment,
            random_generator: rng,
        }
    }

    /// Returns a random generator which can be used to generate random values (see [`Random`] for
    /// more information).
    pub fn random(&mut self) -> &mut dyn Random {
        self.random_generator
    }

    /// Returns all slots of the puzzle, in puzzle order.
    pub fn get_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.graph.variable_ids()
    }

    /// Returns the slots which do not hold a word yet, in puzzle order.
    pub fn get_unassigned_variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.graph
            .variable_ids()
            .filter(|&variable| !self.assignment.is_assigned(variable))
    }

    pub fn variable(&self, variable: VariableId) -> Variable {
        self.graph.variable(variable)
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assignment.is_assigned(variable)
    }

    /// Returns the word placed in `variable`, if any.
    pub fn value(&self, variable: VariableId) -> Option<WordId> {
        self.assignment.value(variable)
    }

    /// Returns the candidate words of `variable`, in no particular order.
    pub fn domain(&self, variable: VariableId) -> &[WordId] {
        self.domains.domain(variable)
    }

    pub fn get_size_of_domain(&self, variable: VariableId) -> usize {
        self.domains.size(variable)
    }

    /// Returns the slots which share a cell with `variable` together with the shared cell.
    pub fn neighbours(&self, variable: VariableId) -> &[(VariableId, Overlap)] {
        self.graph.neighbours(variable)
    }

    /// The number of overlap constraints `variable` takes part in.
    pub fn num_neighbours(&self, variable: VariableId) -> usize {
        self.graph.num_neighbours(variable)
    }

    pub fn word(&self, word: WordId) -> &Word {
        self.graph.word(word)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::engine::ConstraintGraph;
    use crate::engine::DomainStore;
    use crate::engine::PartialAssignment;
    use crate::model::Direction;
    use crate::model::Overlap;
    use crate::model::SlotGraph;
    use crate::model::Variable;

    /// The data needed to create a [`SelectionContext`][super::SelectionContext] in tests.
    #[derive(Debug)]
    pub(crate) struct TestState {
        pub(crate) graph: ConstraintGraph,
        pub(crate) domains: DomainStore,
        pub(crate) assignment: PartialAssignment,
    }

    impl TestState {
        pub(crate) fn new(puzzle: &SlotGraph) -> TestState {
            let graph = ConstraintGraph::new(puzzle);
            let domains = DomainStore::initialise(&graph);
            let assignment = PartialAssignment::new(&graph);

            TestState {
                graph,
                domains,
                assignment,
            }
        }
    }

    /// Three slots where the first one crosses the other two:
    /// - `(0, 0) across : 3` (3 letter words)
    /// - `(0, 0) down : 2` (2 letter words)
    /// - `(0, 2) down : 3` (3 letter words)
    pub(crate) fn comb(words: &[&str]) -> SlotGraph {
        let top = Variable::new(0, 0, Direction::Across, 3);
        let left = Variable::new(0, 0, Direction::Down, 2);
        let right = Variable::new(0, 2, Direction::Down, 3);

        SlotGraph::new(
            [top, left, right],
            words,
            [(top, left, Overlap(0, 0)), (top, right, Overlap(2, 0))],
        )
        .expect("valid puzzle")
    }
}
