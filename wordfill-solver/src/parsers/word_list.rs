use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListParseError {
    #[error("failed to read the word list")]
    Io(#[from] std::io::Error),
    #[error("line {line}: '{word}' contains characters which are not letters")]
    InvalidWord { line: usize, word: String },
}

/// Parses a word list with one word per line.
///
/// Words are trimmed and upper-cased; blank lines are skipped. Duplicates are kept, they are
/// collapsed when the vocabulary of a puzzle is built.
pub fn parse_word_list(source: impl Read) -> Result<Vec<String>, WordListParseError> {
    let reader = BufReader::new(source);
    let mut words = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if !word.chars().all(char::is_alphabetic) {
            return Err(WordListParseError::InvalidWord {
                line: index + 1,
                word: word.to_owned(),
            });
        }

        words.push(word.to_uppercase());
    }

    Ok(words)
}
