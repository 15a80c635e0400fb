mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! A call to [`Solver::satisfy`] results in a [`SatisfactionResult`]; a solution is an
    //! [`Assignment`] from slots to words, which can be checked against the puzzle with
    //! [`Assignment::is_complete`] and [`Assignment::is_consistent`].
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Assignment;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the identifiers which the [`Solver`] uses for the slots of a puzzle.
    //!
    //! Slots are described by a [`Variable`] in a [`Puzzle`]; within a single solve every slot is
    //! addressed by a dense [`VariableId`], handed out in the order in which the puzzle lists its
    //! slots. The [`Brancher`] only ever sees [`VariableId`]s and [`WordId`]s.
    pub use crate::basic_types::WordId;
    pub use crate::engine::VariableId;
    #[cfg(doc)]
    use crate::branching::Brancher;
    #[cfg(doc)]
    use crate::model::Puzzle;
    #[cfg(doc)]
    use crate::model::Variable;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - Whether arc consistency is maintained during search
    //! - The random generator used by randomised heuristics
    //! - Which heuristics are used, when the brancher is chosen at runtime
    pub use crate::api::solver::SolverOptions;
    pub use crate::branching::ValueSelectionStrategy;
    pub use crate::branching::VariableSelectionStrategy;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when it is unknown whether the puzzle can be filled.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the [`Solver`] during
    //! the search process. It indicates when the [`Solver`] should stop, even if no definitive
    //! conclusions have been made.
    //!
    //! The most common example would be [`TimeBudget`], which terminates the [`Solver`] whenever
    //! the time budget is exceeded.
    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::decision_budget::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod domains {
    //! Contains the structures which hold and prune the candidate words of the slots.
    //!
    //! A [`ConstraintGraph`] is the dense form of a puzzle; a [`DomainStore`] holds the candidate
    //! words of every slot and [`ArcConsistency`] removes the words which cannot agree with any
    //! candidate of a crossing slot. The [`Solver`] combines these, but they can also be used on
    //! their own, e.g. to inspect how much a vocabulary is pruned for a grid.
    pub use crate::engine::consistency::ArcConsistency;
    pub use crate::engine::consistency::DirectedArc;
    pub use crate::engine::consistency::EmptyDomain;
    pub use crate::engine::ConstraintGraph;
    pub use crate::engine::DomainStore;
    #[cfg(doc)]
    use crate::Solver;
}
