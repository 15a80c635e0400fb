use crate::basic_types::WordId;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A trait containing the interface for [`ValueSelector`]s, specifying the method required for
/// ordering the candidate words of a slot.
pub trait ValueSelector {
    /// Returns the candidate words of `decision_variable` in the order in which the search should
    /// try them; the returned words are exactly the words in the domain of `decision_variable`.
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<WordId>;
}

impl<T: ValueSelector + ?Sized> ValueSelector for Box<T> {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<WordId> {
        self.as_mut().order_values(context, decision_variable)
    }
}

/// The domain of `variable` in vocabulary order.
pub(crate) fn sorted_domain(context: &SelectionContext, variable: VariableId) -> Vec<WordId> {
    let mut words = context.domain(variable).to_vec();
    words.sort_unstable();
    words
}
