use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use thiserror::Error;

/// The character marking a cell which has to be filled.
pub const OPEN_CELL: char = '_';

#[derive(Debug, Error)]
pub enum StructureParseError {
    #[error("failed to read the structure")]
    Io(#[from] std::io::Error),
    #[error("the structure does not contain any cells")]
    Empty,
}

/// Parses a grid structure; the result holds `true` for every cell which has to be filled.
///
/// Every line is a row of the grid. Rows may differ in length; the grid is as wide as its longest
/// row and the cells missing from shorter rows are blocked.
pub fn parse_structure(source: impl Read) -> Result<Vec<Vec<bool>>, StructureParseError> {
    let reader = BufReader::new(source);

    let rows = reader
        .lines()
        .map(|line| Ok(line?.chars().map(|cell| cell == OPEN_CELL).collect()))
        .collect::<Result<Vec<Vec<bool>>, std::io::Error>>()?;

    if rows.iter().all(Vec::is_empty) {
        return Err(StructureParseError::Empty);
    }

    Ok(rows)
}
