use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A [`VariableSelector`] which selects the first slot, in puzzle order, which does not hold a
/// word yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        context.get_unassigned_variables().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::basic_types::WordId;
    use crate::branching::selection_context::tests::comb;
    use crate::branching::selection_context::tests::TestState;

    #[test]
    fn first_unassigned_slot_is_selected() {
        let puzzle = comb(&["CAT", "TOP", "APE", "CO", "AX"]);
        let mut state = TestState::new(&puzzle);
        state.assignment.assign(VariableId::new(0), WordId { id: 0 });
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(
            &state.graph,
            &state.domains,
            &state.assignment,
            &mut test_rng,
        );

        assert_eq!(
            InputOrder.select_variable(&mut context),
            Some(VariableId::new(1))
        );
    }
}
