//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait relies on [`VariableSelector::select_variable`] which selects the
//! next slot to fill.
//!
//! Note that a variable selector only ever considers slots which do not hold a word yet; it
//! returns [`None`] exactly when every slot is filled.
mod first_fail;
mod input_order;
mod most_constrained;
mod variable_selector;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use most_constrained::MostConstrained;
pub use most_constrained::MostConstrainedValue;
pub use variable_selector::VariableSelector;
