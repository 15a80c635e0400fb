use thiserror::Error;

use super::Overlap;
use super::Variable;

/// Errors related to building a puzzle which the solver cannot work with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("The vocabulary contains an empty word")]
    EmptyWord,
    #[error("The slot {0} has length zero")]
    ZeroLengthVariable(Variable),
    #[error("The slot {0} is declared more than once")]
    DuplicateVariable(Variable),
    #[error("The overlap refers to the slot {0} which is not part of the puzzle")]
    UnknownVariable(Variable),
    #[error("The slot {0} cannot overlap with itself")]
    SelfOverlap(Variable),
    #[error("The overlap {overlap:?} between {x} and {y} falls outside of one of the slots")]
    OverlapOutOfBounds {
        x: Variable,
        y: Variable,
        overlap: Overlap,
    },
    #[error("The slots {x} and {y} are declared to overlap in two different cells")]
    ConflictingOverlap { x: Variable, y: Variable },
    #[error("The grid does not contain any cells")]
    EmptyStructure,
}
