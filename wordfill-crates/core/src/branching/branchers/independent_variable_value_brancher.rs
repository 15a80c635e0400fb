use crate::basic_types::WordId;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::value_selection::LeastConstrainingValue;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::MostConstrained;
use crate::branching::variable_selection::MostConstrainedValue;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::VariableId;
use crate::wordfill_assert_simple;

/// The [`Brancher`] used by [`Solver::default_brancher`][crate::Solver::default_brancher]: the
/// most constrained slot is filled first, trying its least constraining words first.
pub type DefaultBrancher = IndependentVariableValueBrancher<
    MostConstrained<InOrderTieBreaker<VariableId, MostConstrainedValue>>,
    LeastConstrainingValue,
>;

/// A [`Brancher`] of which the selectors are chosen at runtime.
pub type DynamicBrancher =
    IndependentVariableValueBrancher<Box<dyn VariableSelector>, Box<dyn ValueSelector>>;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a single
/// [`ValueSelector`] independently of one another.
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// The [`VariableSelector`] of the [`Brancher`], determines which (unassigned) slot to fill
    /// next.
    variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`] determines in which order the candidate words of
    /// the selected slot are tried.
    value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> std::fmt::Debug
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndependentVariableValueBrancher").finish()
    }
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(var_selector: VariableSelect, val_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector: var_selector,
            value_selector: val_selector,
        }
    }
}

impl Default for DefaultBrancher {
    fn default() -> Self {
        IndependentVariableValueBrancher::new(MostConstrained::new(), LeastConstrainingValue)
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<VariableId> {
        let selected = self.variable_selector.select_variable(context);
        wordfill_assert_simple!(
            !selected.is_some_and(|variable| context.is_assigned(variable)),
            "The variable selector selected a slot which already holds a word"
        );
        selected
    }

    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: VariableId,
    ) -> Vec<WordId> {
        self.value_selector.order_values(context, variable)
    }
}
