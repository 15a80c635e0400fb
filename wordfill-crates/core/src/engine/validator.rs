//! Checks whether an assignment is a solution of a puzzle.
//!
//! The search only uses [`is_consistent_extension`]; the full checks are used to verify solutions
//! and are exposed through [`Assignment`].
use super::ConstraintGraph;
use super::PartialAssignment;
use super::VariableId;
use crate::basic_types::Assignment;
use crate::basic_types::HashSet;
use crate::basic_types::WordId;
use crate::model::Puzzle;

/// Whether every slot of `puzzle` holds a word from its vocabulary, and nothing else is assigned.
pub(crate) fn is_complete<P: Puzzle + ?Sized>(puzzle: &P, assignment: &Assignment) -> bool {
    assignment.len() == puzzle.variables().len()
        && puzzle.variables().iter().all(|&variable| {
            assignment
                .get(variable)
                .is_some_and(|word| puzzle.vocabulary().contains(word))
        })
}

/// Whether every word has the length of its slot, every pair of assigned overlapping slots agrees
/// on the shared cell and no word is used twice.
pub(crate) fn is_consistent<P: Puzzle + ?Sized>(puzzle: &P, assignment: &Assignment) -> bool {
    let mut used_words = HashSet::default();

    assignment.iter().all(|(variable, word)| {
        if word.len() != variable.length || !used_words.insert(word) {
            return false;
        }

        puzzle.neighbors(variable).iter().all(|&neighbour| {
            let (Some(other), Some(overlap)) =
                (assignment.get(neighbour), puzzle.overlap(variable, neighbour))
            else {
                return true;
            };

            other.len() == neighbour.length && word.letter(overlap.0) == other.letter(overlap.1)
        })
    })
}

/// Whether placing `word` in the unassigned `variable` keeps a consistent `assignment` consistent.
///
/// Only the constraints involving `variable` are checked.
pub(crate) fn is_consistent_extension(
    graph: &ConstraintGraph,
    assignment: &PartialAssignment,
    variable: VariableId,
    word: WordId,
) -> bool {
    let candidate = graph.word(word);

    candidate.len() == graph.variable(variable).length
        && !assignment.is_used(word)
        && graph
            .neighbours(variable)
            .iter()
            .all(|&(neighbour, overlap)| match assignment.value(neighbour) {
                Some(other) => candidate.letter(overlap.0) == graph.word(other).letter(overlap.1),
                None => true,
            })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Word;
    use crate::model::Direction;
    use crate::model::Overlap;
    use crate::model::SlotGraph;
    use crate::model::Variable;

    fn across() -> Variable {
        Variable::new(0, 0, Direction::Across, 3)
    }

    fn down() -> Variable {
        Variable::new(0, 0, Direction::Down, 3)
    }

    fn puzzle() -> SlotGraph {
        SlotGraph::new(
            [across(), down()],
            ["CAT", "COW", "DOG", "EWE"],
            [(across(), down(), Overlap(0, 0))],
        )
        .expect("valid puzzle")
    }

    fn assignment(words: &[(Variable, &str)]) -> Assignment {
        words
            .iter()
            .map(|&(variable, word)| (variable, Word::new(word)))
            .collect()
    }

    #[test]
    fn consistent_complete_assignment() {
        let puzzle = puzzle();
        let solution = assignment(&[(across(), "CAT"), (down(), "COW")]);

        assert!(is_complete(&puzzle, &solution));
        assert!(is_consistent(&puzzle, &solution));
    }

    #[test]
    fn disagreeing_overlap_is_inconsistent() {
        let puzzle = puzzle();

        assert!(!is_consistent(
            &puzzle,
            &assignment(&[(across(), "CAT"), (down(), "DOG")])
        ));
    }

    #[test]
    fn reused_word_is_inconsistent() {
        let x = across();
        let y = Variable::new(2, 0, Direction::Across, 3);
        let puzzle = SlotGraph::new([x, y], ["CAT"], []).expect("valid puzzle");

        assert!(!is_consistent(
            &puzzle,
            &assignment(&[(x, "CAT"), (y, "CAT")])
        ));
    }

    #[test]
    fn word_of_wrong_length_is_inconsistent() {
        let puzzle = puzzle();

        assert!(!is_consistent(&puzzle, &assignment(&[(across(), "CATS")])));
    }

    #[test]
    fn partial_or_foreign_assignments_are_incomplete() {
        let puzzle = puzzle();

        assert!(!is_complete(&puzzle, &assignment(&[(across(), "CAT")])));
        assert!(!is_complete(
            &puzzle,
            &assignment(&[(across(), "CAT"), (down(), "CUB")])
        ));
        assert!(is_consistent(&puzzle, &Assignment::default()));
    }

    #[test]
    fn extension_checks_only_the_new_slot() {
        let puzzle = puzzle();
        let graph = ConstraintGraph::new(&puzzle);
        let mut partial = PartialAssignment::new(&graph);
        let (x, y) = (VariableId::new(0), VariableId::new(1));
        let word = |text: &str| {
            graph
                .word_id_of(&Word::new(text))
                .expect("word is in the vocabulary")
        };

        partial.assign(x, word("CAT"));

        assert!(is_consistent_extension(&graph, &partial, y, word("COW")));
        assert!(!is_consistent_extension(&graph, &partial, y, word("DOG")));
        assert!(!is_consistent_extension(&graph, &partial, y, word("CAT")));
    }
}
