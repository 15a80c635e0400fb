use super::VariableId;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::Word;
use crate::basic_types::WordId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::model::Overlap;
use crate::model::Puzzle;
use crate::model::Variable;
use crate::wordfill_assert_simple;

/// The binary constraints of a [`Puzzle`] in dense form.
///
/// Slots are addressed by [`VariableId`] and words by [`WordId`]; both are assigned in the order in
/// which the puzzle lists them. The graph is static for the duration of a solve.
#[derive(Clone, Debug)]
pub struct ConstraintGraph {
    variables: KeyedVec<VariableId, Variable>,
    ids: HashMap<Variable, VariableId>,
    /// For every slot the slots it shares a cell with, together with the shared cell as seen from
    /// the slot itself
    neighbours: KeyedVec<VariableId, Vec<(VariableId, Overlap)>>,
    overlaps: HashMap<(VariableId, VariableId), Overlap>,
    words: KeyedVec<WordId, Word>,
}

impl ConstraintGraph {
    pub fn new(puzzle: &impl Puzzle) -> ConstraintGraph {
        let variables: KeyedVec<VariableId, Variable> =
            puzzle.variables().iter().copied().collect();
        let ids = variables
            .iter_with_keys()
            .map(|(id, &variable)| (variable, id))
            .collect::<HashMap<_, _>>();
        wordfill_assert_simple!(
            ids.len() == variables.len(),
            "The puzzle contains the same slot more than once"
        );

        let mut overlaps = HashMap::default();
        let neighbours = variables
            .iter_with_keys()
            .map(|(x_id, &x)| {
                puzzle
                    .neighbors(x)
                    .iter()
                    .filter_map(|&y| {
                        let overlap = puzzle.overlap(x, y)?;
                        let y_id = *ids.get(&y)?;

                        wordfill_assert_simple!(
                            puzzle.overlap(y, x) == Some(overlap.reversed()),
                            "The overlap between {x} and {y} is not symmetric"
                        );
                        wordfill_assert_simple!(
                            overlap.0 < x.length && overlap.1 < y.length,
                            "The overlap between {x} and {y} falls outside of the slots"
                        );

                        let _ = overlaps.insert((x_id, y_id), overlap);
                        Some((y_id, overlap))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut seen = HashSet::default();
        let words = puzzle
            .vocabulary()
            .iter()
            .filter(|word| seen.insert(*word))
            .cloned()
            .collect();

        ConstraintGraph {
            variables,
            ids,
            neighbours,
            overlaps,
            words,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    pub fn variable(&self, id: VariableId) -> Variable {
        self.variables[id]
    }

    /// The identifier of `variable`, or [`None`] if it is not part of the puzzle.
    pub fn id_of(&self, variable: Variable) -> Option<VariableId> {
        self.ids.get(&variable).copied()
    }

    pub fn word_ids(&self) -> impl Iterator<Item = WordId> {
        self.words.keys()
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// The identifier of `word`, or [`None`] if it is not part of the vocabulary.
    pub fn word_id_of(&self, word: &Word) -> Option<WordId> {
        self.words
            .iter_with_keys()
            .find(|(_, candidate)| *candidate == word)
            .map(|(id, _)| id)
    }

    /// The slots sharing a cell with `variable`, in puzzle order.
    pub fn neighbours(&self, variable: VariableId) -> &[(VariableId, Overlap)] {
        &self.neighbours[variable]
    }

    pub fn num_neighbours(&self, variable: VariableId) -> usize {
        self.neighbours[variable].len()
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Every ordered pair of slots which share a cell; pairs are grouped by their first slot in
    /// puzzle order.
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbours
            .iter_with_keys()
            .flat_map(|(x, adjacent)| adjacent.iter().map(move |&(y, _)| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Crossword;
    use crate::model::Direction;

    fn ring() -> Crossword {
        let structure = ["___", "_#_", "___"]
            .iter()
            .map(|row| row.chars().map(|c| c == '_').collect())
            .collect();
        Crossword::new(structure, ["CAT", "COW", "CAT"]).expect("valid grid")
    }

    #[test]
    fn identifiers_follow_puzzle_order() {
        let crossword = ring();
        let graph = ConstraintGraph::new(&crossword);

        assert_eq!(graph.num_variables(), 4);
        assert_eq!(
            graph.variable(VariableId::new(1)),
            Variable::new(0, 0, Direction::Down, 3)
        );
        assert_eq!(
            graph.id_of(Variable::new(2, 0, Direction::Across, 3)),
            Some(VariableId::new(3))
        );
    }

    #[test]
    fn duplicate_words_are_stored_once() {
        let crossword = ring();
        let graph = ConstraintGraph::new(&crossword);

        assert_eq!(graph.num_words(), 2);
        assert_eq!(
            graph.word_id_of(&Word::new("COW")),
            Some(WordId::create_from_index(1))
        );
    }

    #[test]
    fn every_overlap_yields_two_arcs() {
        let crossword = ring();
        let graph = ConstraintGraph::new(&crossword);

        let arcs = graph.arcs().collect::<Vec<_>>();

        assert_eq!(arcs.len(), 8);
        for (x, y) in arcs {
            assert!(graph.overlap(y, x).is_some());
            assert_eq!(
                graph.overlap(x, y).map(Overlap::reversed),
                graph.overlap(y, x)
            );
        }
    }
}
