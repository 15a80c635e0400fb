use super::ConstraintGraph;
use super::VariableId;
use crate::basic_types::Assignment;
use crate::basic_types::WordId;
use crate::containers::KeyedVec;
use crate::wordfill_assert_simple;

/// The assignment built by the search, in terms of [`VariableId`]s and [`WordId`]s.
///
/// Next to the word of every slot it tracks which words are in use, so that the search can reject
/// a word which is already placed elsewhere in constant time.
#[derive(Clone, Debug)]
pub(crate) struct PartialAssignment {
    values: KeyedVec<VariableId, Option<WordId>>,
    is_used: KeyedVec<WordId, bool>,
    num_assigned: usize,
}

impl PartialAssignment {
    pub(crate) fn new(graph: &ConstraintGraph) -> PartialAssignment {
        PartialAssignment {
            values: graph.variable_ids().map(|_| None).collect(),
            is_used: graph.word_ids().map(|_| false).collect(),
            num_assigned: 0,
        }
    }

    pub(crate) fn assign(&mut self, variable: VariableId, word: WordId) {
        wordfill_assert_simple!(
            self.values[variable].is_none(),
            "The slot {variable} is assigned twice"
        );
        wordfill_assert_simple!(!self.is_used[word], "The word {word:?} is used twice");

        self.values[variable] = Some(word);
        self.is_used[word] = true;
        self.num_assigned += 1;
    }

    /// Retracts the word placed in `variable`, returning it.
    pub(crate) fn unassign(&mut self, variable: VariableId) -> Option<WordId> {
        let word = self.values[variable].take()?;
        self.is_used[word] = false;
        self.num_assigned -= 1;
        Some(word)
    }

    pub(crate) fn value(&self, variable: VariableId) -> Option<WordId> {
        self.values[variable]
    }

    pub(crate) fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable].is_some()
    }

    pub(crate) fn is_used(&self, word: WordId) -> bool {
        self.is_used[word]
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    /// Converts to an [`Assignment`] over the slots and words of the puzzle.
    pub(crate) fn to_assignment(&self, graph: &ConstraintGraph) -> Assignment {
        self.values
            .iter_with_keys()
            .filter_map(|(variable, word)| {
                word.map(|word| (graph.variable(variable), graph.word(word).clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Word;
    use crate::containers::StorageKey;
    use crate::model::Direction;
    use crate::model::SlotGraph;
    use crate::model::Variable;

    fn graph() -> ConstraintGraph {
        let puzzle = SlotGraph::new(
            [
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(2, 0, Direction::Across, 3),
            ],
            ["CAT", "DOG"],
            [],
        )
        .expect("valid puzzle");
        ConstraintGraph::new(&puzzle)
    }

    #[test]
    fn unassigning_releases_the_word() {
        let graph = graph();
        let mut assignment = PartialAssignment::new(&graph);
        let x = VariableId::new(0);
        let cat = WordId::create_from_index(0);

        assignment.assign(x, cat);
        assert!(assignment.is_used(cat));
        assert_eq!(assignment.num_assigned(), 1);

        assert_eq!(assignment.unassign(x), Some(cat));
        assert!(!assignment.is_used(cat));
        assert!(!assignment.is_assigned(x));
        assert_eq!(assignment.unassign(x), None);
    }

    #[test]
    fn conversion_keeps_only_assigned_slots() {
        let graph = graph();
        let mut assignment = PartialAssignment::new(&graph);

        assignment.assign(VariableId::new(1), WordId::create_from_index(1));
        let converted = assignment.to_assignment(&graph);

        assert!(!assignment.is_complete());
        assert_eq!(converted.len(), 1);
        assert_eq!(
            converted.get(Variable::new(2, 0, Direction::Across, 3)),
            Some(&Word::new("DOG"))
        );
    }
}
