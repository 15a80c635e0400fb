//! Pruning of the domains based on the overlap constraints.
//!
//! Node consistency (every word in a domain has the length of its slot) is established when the
//! [`DomainStore`][crate::engine::DomainStore] is initialised; this module takes care of arc
//! consistency.
mod arc_consistency;
mod arc_queue;

pub use arc_consistency::ArcConsistency;
pub use arc_consistency::EmptyDomain;
pub use arc_queue::DirectedArc;
