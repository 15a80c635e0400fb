//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait relies on [`ValueSelector::order_values`] which determines the order
//! in which the candidate words of a slot are tried.
mod in_domain_order;
mod in_domain_random;
mod least_constraining_value;
mod value_selector;

pub use in_domain_order::InDomainOrder;
pub use in_domain_random::InDomainRandom;
pub use least_constraining_value::LeastConstrainingValue;
pub use value_selector::ValueSelector;
