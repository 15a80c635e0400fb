pub(crate) mod consistency;
mod constraint_graph;
mod domain_store;
mod partial_assignment;
mod search;
mod solver_statistics;
pub(crate) mod termination;
pub(crate) mod validator;
mod variable_id;

pub use constraint_graph::ConstraintGraph;
pub use domain_store::DomainStore;
pub(crate) use partial_assignment::PartialAssignment;
pub(crate) use search::Search;
pub(crate) use search::SearchStatus;
pub(crate) use solver_statistics::SolverStatistics;
pub use variable_id::VariableId;
