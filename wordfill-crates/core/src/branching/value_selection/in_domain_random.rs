use super::value_selector::sorted_domain;
use crate::basic_types::WordId;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A [`ValueSelector`] which tries the candidate words in a uniformly random order.
///
/// The order only depends on the random generator of the solver, so a seeded generator gives
/// reproducible runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainRandom;

impl ValueSelector for InDomainRandom {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<WordId> {
        let mut words = sorted_domain(context, decision_variable);

        // Fisher-Yates
        for index in (1..words.len()).rev() {
            let other = context.random().generate_usize_in_range(0..index + 1);
            words.swap(index, other);
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::branching::selection_context::tests::comb;
    use crate::branching::selection_context::tests::TestState;

    #[test]
    fn words_are_shuffled_with_the_provided_generator() {
        let puzzle = comb(&["CAT", "TOP", "APE", "CO", "AX"]);
        let state = TestState::new(&puzzle);
        let mut test_random = TestRandom {
            usizes: vec![0, 1],
            ..Default::default()
        };
        let mut context = SelectionContext::new(
            &state.graph,
            &state.domains,
            &state.assignment,
            &mut test_random,
        );

        let ordered = InDomainRandom.order_values(&mut context, VariableId::new(0));

        // [CAT, TOP, APE] -> swap(2, 0) -> [APE, TOP, CAT] -> swap(1, 1)
        assert_eq!(
            ordered,
            vec![WordId { id: 2 }, WordId { id: 1 }, WordId { id: 0 }]
        );
    }
}
