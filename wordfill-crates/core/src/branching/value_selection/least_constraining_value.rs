use super::value_selector::sorted_domain;
use crate::basic_types::HashMap;
use crate::basic_types::WordId;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;

/// A [`ValueSelector`] which first tries the candidate words that rule out the fewest candidates
/// of the neighbouring slots.
///
/// A word `w` for slot `x` rules out a candidate `w'` of an unassigned neighbour `y` with overlap
/// `(ix, iy)` when `w[ix] != w'[iy]`. Neighbours which already hold a word are not counted. Words
/// which rule out equally many candidates are tried in vocabulary order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingValue;

impl ValueSelector for LeastConstrainingValue {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: VariableId,
    ) -> Vec<WordId> {
        // For every unassigned neighbour: the index of the shared cell in `decision_variable`, the
        // number of candidates of the neighbour, and how often each letter occurs in the shared
        // cell among those candidates.
        let letter_counts = context
            .neighbours(decision_variable)
            .iter()
            .filter(|(neighbour, _)| !context.is_assigned(*neighbour))
            .map(|&(neighbour, overlap)| {
                let mut counts: HashMap<char, usize> = HashMap::default();
                for &word in context.domain(neighbour) {
                    *counts
                        .entry(context.word(word).letter(overlap.1))
                        .or_default() += 1;
                }
                (overlap.0, context.get_size_of_domain(neighbour), counts)
            })
            .collect::<Vec<_>>();

        let mut words = sorted_domain(context, decision_variable);
        words.sort_by_cached_key(|&word| {
            let word = context.word(word);
            letter_counts
                .iter()
                .map(|(index, size, counts)| {
                    size - counts.get(&word.letter(*index)).copied().unwrap_or(0)
                })
                .sum::<usize>()
        });

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::branching::selection_context::tests::comb;
    use crate::branching::selection_context::tests::TestState;

    fn order(state: &TestState, variable: VariableId) -> Vec<String> {
        let mut test_random = TestRandom::default();
        let mut context = SelectionContext::new(
            &state.graph,
            &state.domains,
            &state.assignment,
            &mut test_random,
        );

        LeastConstrainingValue
            .order_values(&mut context, variable)
            .into_iter()
            .map(|word| state.graph.word(word).to_string())
            .collect()
    }

    #[test]
    fn words_ruling_out_fewer_candidates_come_first() {
        // The candidates of the left slot start with C, C and A; those of the right slot with T,
        // A, C and C. CAT rules out 1 + 3, CAP 1 + 4, TOT 3 + 3 and APE 2 + 4 candidates.
        let puzzle = comb(&["TOT", "APE", "CAT", "CAP", "CO", "CA", "AH"]);
        let state = TestState::new(&puzzle);

        assert_eq!(
            order(&state, VariableId::new(0)),
            vec!["CAT", "CAP", "TOT", "APE"]
        );
    }

    #[test]
    fn assigned_neighbours_are_ignored() {
        let puzzle = comb(&["TOT", "APE", "CAT", "CAP", "CO", "CA", "AH"]);
        let mut state = TestState::new(&puzzle);
        // Fill the right slot with TOT, only the left slot is counted
        state.assignment.assign(VariableId::new(2), WordId { id: 0 });

        // Only the left slot counts: CAT and CAP rule out 1, APE 2 and TOT 3 candidates
        assert_eq!(
            order(&state, VariableId::new(0)),
            vec!["CAT", "CAP", "APE", "TOT"]
        );
    }
}
