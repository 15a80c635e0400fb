use std::collections::BTreeMap;

use super::Word;
use crate::engine::validator;
use crate::model::Puzzle;
use crate::model::Variable;

/// A (possibly partial) mapping from slots to words.
///
/// Iteration is in the order of [`Variable`], which gives a stable output independent of the order
/// in which the search made its decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<Variable, Word>,
}

impl Assignment {
    /// Returns the word placed in `variable`, if any.
    pub fn get(&self, variable: Variable) -> Option<&Word> {
        self.words.get(&variable)
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.words.contains_key(&variable)
    }

    /// Places `word` in `variable`, returning the word which was previously placed there.
    pub fn insert(&mut self, variable: Variable, word: Word) -> Option<Word> {
        self.words.insert(variable, word)
    }

    pub fn remove(&mut self, variable: Variable) -> Option<Word> {
        self.words.remove(&variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &Word)> {
        self.words.iter().map(|(variable, word)| (*variable, word))
    }

    /// Whether every slot of `puzzle` is filled with a word from its vocabulary.
    pub fn is_complete(&self, puzzle: &impl Puzzle) -> bool {
        validator::is_complete(puzzle, self)
    }

    /// Whether the placed words fit their slots, agree on every shared cell and are pairwise
    /// distinct.
    pub fn is_consistent(&self, puzzle: &impl Puzzle) -> bool {
        validator::is_consistent(puzzle, self)
    }
}

impl FromIterator<(Variable, Word)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, Word)>>(iter: T) -> Self {
        Assignment {
            words: iter.into_iter().collect(),
        }
    }
}
