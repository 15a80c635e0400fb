use crate::basic_types::Assignment;
use crate::basic_types::WordId;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A trait for defining a branching strategy (oftentimes utilising a [`VariableSelector`] and a
/// [`ValueSelector`]).
///
/// In general, implementations of this trait define how the search proceeds: which slot is filled
/// next and in which order its candidate words are tried. The search itself guarantees that it
/// only places words which are consistent with the words already placed.
///
/// If the [`Brancher`] (or any component thereof) is implemented incorrectly, e.g. by selecting a
/// slot which already holds a word, then the solver panics.
pub trait Brancher {
    /// Returns the next slot to fill, or [`None`] if every slot holds a word.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId>;

    /// Returns the candidate words of `variable` in the order in which they should be tried.
    fn order_values(&mut self, context: &mut SelectionContext, variable: VariableId)
        -> Vec<WordId>;

    /// A function which is called after `word` is removed from `variable` during backtracking.
    fn on_backtrack(&mut self, _variable: VariableId, _word: WordId) {}

    /// This method is called when a solution is found.
    fn on_solution(&mut self, _solution: &Assignment) {}
}
