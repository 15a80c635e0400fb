use super::value_selector::sorted_domain;
use crate::basic_types::WordId;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A [`ValueSelector`] which tries the candidate words in the order of the vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainOrder;

impl ValueSelector for InDomainOrder {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<WordId> {
        sorted_domain(context, decision_variable)
    }
}
