use super::Overlap;
use super::Puzzle;
use super::PuzzleError;
use super::Variable;
use crate::basic_types::collect_vocabulary;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::basic_types::Word;

/// A [`Puzzle`] given directly as its slots, its vocabulary and the cells which slots share.
///
/// Every shared cell only needs to be declared once; the overlap seen from the other slot is
/// derived from it.
///
/// # Example
/// ```rust
/// # use wordfill_core::model::Direction;
/// # use wordfill_core::model::Overlap;
/// # use wordfill_core::model::Puzzle;
/// # use wordfill_core::model::SlotGraph;
/// # use wordfill_core::model::Variable;
/// let x = Variable::new(0, 0, Direction::Across, 3);
/// let y = Variable::new(0, 1, Direction::Down, 3);
///
/// let puzzle = SlotGraph::new([x, y], ["CAT", "APE", "TOP"], [(x, y, Overlap(1, 0))])
///     .expect("a well-formed puzzle");
///
/// assert_eq!(puzzle.overlap(y, x), Some(Overlap(0, 1)));
/// assert_eq!(puzzle.neighbors(x), &[y]);
/// ```
#[derive(Clone, Debug)]
pub struct SlotGraph {
    variables: Vec<Variable>,
    vocabulary: Vec<Word>,
    overlaps: HashMap<(Variable, Variable), Overlap>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl SlotGraph {
    pub fn new(
        variables: impl IntoIterator<Item = Variable>,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        overlaps: impl IntoIterator<Item = (Variable, Variable, Overlap)>,
    ) -> Result<SlotGraph, PuzzleError> {
        let variables = variables.into_iter().collect::<Vec<_>>();

        let mut known_variables = HashSet::default();
        for &variable in variables.iter() {
            if variable.length == 0 {
                return Err(PuzzleError::ZeroLengthVariable(variable));
            }
            if !known_variables.insert(variable) {
                return Err(PuzzleError::DuplicateVariable(variable));
            }
        }

        let mut overlap_map = HashMap::default();
        for (x, y, overlap) in overlaps {
            if !known_variables.contains(&x) {
                return Err(PuzzleError::UnknownVariable(x));
            }
            if !known_variables.contains(&y) {
                return Err(PuzzleError::UnknownVariable(y));
            }
            if x == y {
                return Err(PuzzleError::SelfOverlap(x));
            }
            if overlap.0 >= x.length || overlap.1 >= y.length {
                return Err(PuzzleError::OverlapOutOfBounds { x, y, overlap });
            }

            match overlap_map.get(&(x, y)) {
                Some(&existing) if existing != overlap => {
                    return Err(PuzzleError::ConflictingOverlap { x, y });
                }
                Some(_) => {}
                None => {
                    let _ = overlap_map.insert((x, y), overlap);
                    let _ = overlap_map.insert((y, x), overlap.reversed());
                }
            }
        }

        // Neighbours are listed in the order of the variables to keep iteration deterministic.
        let neighbors = variables
            .iter()
            .map(|&x| {
                let adjacent = variables
                    .iter()
                    .copied()
                    .filter(|&y| overlap_map.contains_key(&(x, y)))
                    .collect::<Vec<_>>();
                (x, adjacent)
            })
            .collect();

        Ok(SlotGraph {
            variables,
            vocabulary: collect_vocabulary(words)?,
            overlaps: overlap_map,
            neighbors,
        })
    }
}

impl Puzzle for SlotGraph {
    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    fn neighbors(&self, variable: Variable) -> &[Variable] {
        self.neighbors
            .get(&variable)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn overlap(&self, x: Variable, y: Variable) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }
}
