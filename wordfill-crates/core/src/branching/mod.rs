//! Contains structures and traits to define the decision making procedure of the
//! [`Solver`][crate::Solver].
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how the search proceeds; its default implementation is
//!   [`IndependentVariableValueBrancher`][branchers::IndependentVariableValueBrancher], which
//!   combines a [`VariableSelector`][variable_selection::VariableSelector] and a
//!   [`ValueSelector`][value_selection::ValueSelector].
//! - The [`VariableSelector`][variable_selection::VariableSelector] which defines which slot is
//!   filled next.
//! - The [`ValueSelector`][value_selection::ValueSelector] which defines in which order the
//!   candidate words of the selected slot are tried.
//!
//! A [`Brancher`] for which both heuristics are chosen at runtime is created through
//! [`VariableSelectionStrategy`] and [`ValueSelectionStrategy`]:
//!
//! ```rust
//! # use wordfill_core::branching::branchers::DynamicBrancher;
//! # use wordfill_core::branching::ValueSelectionStrategy;
//! # use wordfill_core::branching::VariableSelectionStrategy;
//! let brancher = DynamicBrancher::new(
//!     VariableSelectionStrategy::FirstFail.create_selector(None),
//!     ValueSelectionStrategy::InDomainOrder.create_selector(),
//! );
//! ```
mod brancher;
pub mod branchers;
mod selection_context;
mod strategies;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;
pub use strategies::ValueSelectionStrategy;
pub use strategies::VariableSelectionStrategy;
