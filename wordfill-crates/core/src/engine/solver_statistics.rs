use crate::create_statistics_struct;

create_statistics_struct!(
    /// Structure responsible for storing statistics on the search of the solver.
    SolverStatistics {
        /// The number of words placed by the search
        num_decisions: u64,
        /// The number of placed words which were retracted again
        num_backtracks: u64,
        /// The number of candidate words rejected because they clash with placed words
        num_failed_consistency_checks: u64,
        /// The number of times maintaining arc consistency after a decision emptied a domain
        num_inference_conflicts: u64,
        /// The deepest point of the search, in placed words
        peak_depth: u64,
        /// The amount of time spent in the solver, in milliseconds
        time_spent_in_solver_ms: u128,
});
