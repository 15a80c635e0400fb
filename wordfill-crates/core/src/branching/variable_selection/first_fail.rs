use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;
use crate::wordfill_assert_eq_simple;

/// A [`VariableSelector`] which selects the slot with the fewest candidate words.
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] but it is
/// possible to construct the variable selector with a custom [`TieBreaker`] by using
/// the method [`FirstFail::with_tie_breaker`].
pub struct FirstFail<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for FirstFail<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstFail").finish()
    }
}

impl FirstFail<InOrderTieBreaker<VariableId, usize>> {
    pub fn new() -> Self {
        Self {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for FirstFail<InOrderTieBreaker<VariableId, usize>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TieBreaking: TieBreaker<VariableId, usize>> FirstFail<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        wordfill_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to FirstFail attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker"
        );
        Self { tie_breaker }
    }
}

impl<TieBreaking> VariableSelector for FirstFail<TieBreaking>
where
    TieBreaking: TieBreaker<VariableId, usize>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        context.get_unassigned_variables().for_each(|variable| {
            self.tie_breaker
                .consider(variable, context.get_size_of_domain(variable));
        });
        self.tie_breaker.select()
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
    fn ties_are_broken_in_puzzle_order() {
        let puzzle = comb(&["CAT", "TOP", "CO", "AX"]);
        let mut state = TestState::new(&puzzle);
        state.assignment.assign(VariableId::new(0), WordId { id: 0 });
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(
            &state.graph,
            &state.domains,
            &state.assignment,
            &mut test_rng,
        );

        let mut strategy = FirstFail::new();
        assert_eq!(
            strategy.select_variable(&mut context),
            Some(VariableId::new(1))
        );
    }

    #[test]
    fn smallest_domain_is_selected() {
        let puzzle = comb(&["CAT", "TOP", "APE", "CO", "AX"]);
        let state = TestState::new(&puzzle);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(
            &state.graph,
            &state.domains,
            &state.assignment,
            &mut test_rng,
        );

        let mut strategy = FirstFail::new();
        assert_eq!(
            strategy.select_variable(&mut context),
            Some(VariableId::new(1))
        );
    }
}
