use std::cmp::Ordering;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
#[cfg(doc)]
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::VariableId;
use crate::wordfill_assert_eq_simple;

/// Selects the empty slot with the fewest remaining words, like [`FirstFail`], but prefers the slot
/// crossing more other slots when two slots have equally many words. Slots equal on both counts go
/// to the [`TieBreaker`], by default the first in puzzle order.
pub struct MostConstrained<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for MostConstrained<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MostConstrained").finish()
    }
}

/// The score of a slot under [`MostConstrained`]; lower is more constrained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MostConstrainedValue {
    domain_size: usize,
    num_neighbours: usize,
}

impl PartialOrd for MostConstrainedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // More neighbours means a lower score.
        let ordering = self
            .domain_size
            .cmp(&other.domain_size)
            .then_with(|| other.num_neighbours.cmp(&self.num_neighbours));
        Some(ordering)
    }
}

impl MostConstrained<InOrderTieBreaker<VariableId, MostConstrainedValue>> {
    pub fn new() -> Self {
        MostConstrained {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MostConstrained<InOrderTieBreaker<VariableId, MostConstrainedValue>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TieBreaking: TieBreaker<VariableId, MostConstrainedValue>> MostConstrained<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        wordfill_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "MostConstrained needs a tie-breaker which looks for the lowest score"
        );
        MostConstrained { tie_breaker }
    }
}

impl<TieBreaking> VariableSelector for MostConstrained<TieBreaking>
where
    TieBreaking: TieBreaker<VariableId, MostConstrainedValue>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        for variable in context.get_unassigned_variables() {
            let score = MostConstrainedValue {
                domain_size: context.get_size_of_domain(variable),
                num_neighbours: context.num_neighbours(variable),
            };
            self.tie_breaker.consider(variable, score);
        }

        self.tie_breaker.select()
    }
}
