//! The puzzle model: the slots of a puzzle, the words which may be placed in them and the cells
//! which slots share.
//!
//! The solver only interacts with a puzzle through the [`Puzzle`] trait. Two implementations are
//! provided:
//! - [`Crossword`], which derives the slots and their overlaps from the geometry of a grid;
//! - [`SlotGraph`], which takes the slots and overlaps as given.
mod crossword;
mod puzzle_error;
mod slot_graph;
mod variable;

pub use crossword::Crossword;
pub use puzzle_error::PuzzleError;
pub use slot_graph::SlotGraph;
pub use variable::Direction;
pub use variable::Variable;

use crate::basic_types::Word;

/// The cell shared by two slots `x` and `y`: letter `.0` of the word in `x` has to be equal to
/// letter `.1` of the word in `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Overlap(pub usize, pub usize);

impl Overlap {
    /// The same cell seen from the other slot.
    pub fn reversed(self) -> Overlap {
        Overlap(self.1, self.0)
    }
}

/// The interface through which the solver consumes a puzzle.
///
/// Implementations are expected to be well-formed (see [`PuzzleError`] for what is rejected by the
/// provided implementations):
/// - variables are distinct and have a positive length;
/// - `overlap(x, y)` and `overlap(y, x)` describe the same cell with the indices swapped;
/// - overlap indices fall inside both slots;
/// - `neighbors(x)` contains exactly the variables with a non-`None` overlap with `x`.
pub trait Puzzle {
    /// The slots of the puzzle.
    fn variables(&self) -> &[Variable];

    /// The words which may be placed in the slots, without duplicates.
    fn vocabulary(&self) -> &[Word];

    /// The slots which share a cell with `variable`.
    fn neighbors(&self, variable: Variable) -> &[Variable];

    /// The cell shared by `x` and `y`, if any.
    fn overlap(&self, x: Variable, y: Variable) -> Option<Overlap>;
}
