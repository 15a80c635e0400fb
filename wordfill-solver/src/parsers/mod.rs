//! Parsers for the two input files of a puzzle.
//!
//! - A structure file describes the grid: one line per row, where `_` marks a cell which has to be
//!   filled and any other character a blocked cell (see [`parse_structure`]).
//! - A word list contains one word per line (see [`parse_word_list`]).
//!
//! [`parse_crossword`] combines both into a [`Crossword`].
mod structure;
mod word_list;

use std::io::Read;

use log::debug;
pub use structure::*;
use thiserror::Error;
pub use word_list::*;
use wordfill_core::model::Crossword;
use wordfill_core::model::Puzzle;
use wordfill_core::model::PuzzleError;

#[derive(Debug, Error)]
pub enum CrosswordParseError {
    #[error("invalid structure: {0}")]
    Structure(#[from] StructureParseError),
    #[error("invalid word list: {0}")]
    WordList(#[from] WordListParseError),
    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
    #[error("the structure does not contain a run of two or more open cells")]
    NoSlots,
}

/// Reads a structure and a word list and builds the [`Crossword`] they describe.
pub fn parse_crossword(
    structure: impl Read,
    word_list: impl Read,
) -> Result<Crossword, CrosswordParseError> {
    let structure = parse_structure(structure)?;
    let words = parse_word_list(word_list)?;

    let crossword = Crossword::new(structure, words)?;
    if crossword.variables().is_empty() {
        return Err(CrosswordParseError::NoSlots);
    }

    debug!(
        "Read a {}x{} grid with {} slots and {} words",
        crossword.height(),
        crossword.width(),
        crossword.variables().len(),
        crossword.vocabulary().len()
    );
    Ok(crossword)
}
