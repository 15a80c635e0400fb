use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::HashSet;
use crate::containers::StorageKey;
use crate::model::PuzzleError;

/// A candidate entry for a slot.
///
/// Letters are addressed by their `char` position, so an overlap index always refers to a whole
/// letter regardless of its UTF-8 width.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: Box<[char]>,
}

impl Word {
    pub fn new(text: &str) -> Word {
        Word {
            letters: text.chars().collect(),
        }
    }

    /// The number of letters in the word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the letter at `index`.
    ///
    /// Panics when `index` is outside the word; overlap indices are validated when a puzzle is
    /// built, so reaching this panic means an invariant was broken.
    pub fn letter(&self, index: usize) -> char {
        self.letters[index]
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.letters.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}

impl From<&str> for Word {
    fn from(value: &str) -> Self {
        Word::new(value)
    }
}

/// A dense identifier of a word in the vocabulary of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId {
    pub id: u32,
}

impl StorageKey for WordId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        WordId { id: index as u32 }
    }
}

/// Turns a list of words into a vocabulary: duplicates are collapsed (keeping the first
/// occurrence) and empty words are rejected.
pub(crate) fn collect_vocabulary(
    words: impl IntoIterator<Item = impl AsRef<str>>,
) -> Result<Vec<Word>, PuzzleError> {
    let mut seen = HashSet::default();
    let mut vocabulary = Vec::new();

    for word in words {
        let word = Word::new(word.as_ref());
        if word.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }
        if seen.insert(word.clone()) {
            vocabulary.push(word);
        }
    }

    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_indexed_by_char() {
        let word = Word::new("ÉTÉ");

        assert_eq!(word.len(), 3);
        assert_eq!(word.letter(1), 'T');
        assert_eq!(word.to_string(), "ÉTÉ");
    }

    #[test]
    fn duplicates_are_collapsed_in_order() {
        let vocabulary = collect_vocabulary(["CAT", "DOG", "CAT"]).expect("valid vocabulary");

        assert_eq!(vocabulary, vec![Word::new("CAT"), Word::new("DOG")]);
    }

    #[test]
    fn empty_words_are_rejected() {
        let result = collect_vocabulary(["CAT", ""]);

        assert!(matches!(result, Err(PuzzleError::EmptyWord)));
    }
}
