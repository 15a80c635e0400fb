use std::fmt::Display;

use thiserror::Error;
use wordfill_solver::parsers::CrosswordParseError;

pub(crate) type WordfillResult<T> = Result<T, WordfillError>;

#[derive(Error, Debug)]
pub(crate) enum WordfillError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Could not access {path}, more details: {source}")]
    InaccessibleFile {
        path: String,
        source: std::io::Error,
    },
    #[error("The puzzle was invalid, more details: {0}")]
    InvalidPuzzle(#[from] CrosswordParseError),
}

impl WordfillError {
    pub(crate) fn inaccessible_file(path: impl Display, source: std::io::Error) -> Self {
        Self::InaccessibleFile {
            path: format!("{path}"),
            source,
        }
    }
}
