use std::time::Instant;

use log::debug;
use log::info;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::outputs::SatisfactionResult;
use crate::basic_types::Assignment;
use crate::branching::branchers::DefaultBrancher;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::engine::consistency::ArcConsistency;
use crate::engine::consistency::EmptyDomain;
use crate::engine::termination::indefinite::Indefinite;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintGraph;
use crate::engine::DomainStore;
use crate::engine::Search;
use crate::engine::SearchStatus;
use crate::engine::SolverStatistics;
use crate::model::Puzzle;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::wordfill_assert_moderate;

/// Options for the [`Solver`] which determine how it behaves.
#[derive(Debug)]
pub struct SolverOptions {
    /// Whether arc consistency is restored after every word the search places. This prunes the
    /// candidates of the remaining slots at the cost of extra work per decision; it never changes
    /// whether a solution is found.
    pub maintain_arc_consistency: bool,
    /// The random generator which is handed to the [`VariableSelector`]s and [`ValueSelector`]s.
    pub random_generator: SmallRng,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            maintain_arc_consistency: false,
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

/// The main interaction point for filling puzzles.
///
/// Every call to [`Solver::satisfy`] starts from the full vocabulary; the solver only keeps its
/// options and its statistics between calls.
///
/// # Example
/// ```rust
/// # use wordfill_core::model::Crossword;
/// # use wordfill_core::results::SatisfactionResult;
/// # use wordfill_core::termination::Indefinite;
/// # use wordfill_core::Solver;
/// let structure = ["___", "_#_", "___"]
///     .iter()
///     .map(|row| row.chars().map(|cell| cell == '_').collect())
///     .collect();
/// let crossword = Crossword::new(structure, ["CAT", "COW", "WEB", "TAB", "DOG"])
///     .expect("a well-formed crossword");
///
/// let mut solver = Solver::default();
/// let mut brancher = solver.default_brancher();
/// let result = solver.satisfy(&crossword, &mut brancher, &mut Indefinite);
///
/// let SatisfactionResult::Satisfiable(solution) = result else {
///     panic!("the crossword can be filled");
/// };
/// assert!(solution.is_complete(&crossword));
/// assert!(solution.is_consistent(&crossword));
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    options: SolverOptions,
    arc_consistency: ArcConsistency,
    statistics: SolverStatistics,
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            options,
            arc_consistency: ArcConsistency::default(),
            statistics: SolverStatistics::default(),
        }
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.statistics.log(StatisticLogger::default());
        self.arc_consistency
            .statistics()
            .log(StatisticLogger::new(["arc_consistency"]));
        log_statistic_postfix();
    }

    /// Creates an instance of the [`DefaultBrancher`].
    pub fn default_brancher(&self) -> DefaultBrancher {
        DefaultBrancher::default()
    }

    /// Searches for a way to fill every slot of `puzzle`, using `brancher` to decide which slot to
    /// fill next and which words to try; the search stops early when `termination` triggers.
    ///
    /// Before searching, the candidate words are pruned until every pair of crossing slots is arc
    /// consistent; if this empties a domain the puzzle is reported unsatisfiable without searching.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        puzzle: &impl Puzzle,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let started_at = Instant::now();
        let result = self.fill(puzzle, brancher, termination);
        self.statistics.time_spent_in_solver_ms += started_at.elapsed().as_millis();

        match &result {
            SatisfactionResult::Satisfiable(_) => {
                info!("Filled all {} slots", puzzle.variables().len())
            }
            SatisfactionResult::Unsatisfiable => info!("The puzzle cannot be filled"),
            SatisfactionResult::Unknown => info!("Stopped before the search was concluded"),
        }

        result
    }

    fn fill<B: Brancher, T: TerminationCondition>(
        &mut self,
        puzzle: &impl Puzzle,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let graph = ConstraintGraph::new(puzzle);
        let mut domains = DomainStore::initialise(&graph);

        for variable in graph.variable_ids() {
            if domains.is_empty(variable) {
                warn!("The slot {} has no candidate words", graph.variable(variable));
            }
        }

        if let Err(EmptyDomain { variable }) =
            self.arc_consistency.enforce(&graph, &mut domains, None)
        {
            debug!(
                "Arc consistency leaves no words for {}",
                graph.variable(variable)
            );
            return SatisfactionResult::Unsatisfiable;
        }
        debug!(
            "Arc consistency leaves {} candidate words over {} slots",
            graph
                .variable_ids()
                .map(|variable| domains.size(variable))
                .sum::<usize>(),
            graph.num_variables()
        );

        let mut search = Search::new(
            puzzle,
            &graph,
            domains,
            &mut self.arc_consistency,
            &mut self.options.random_generator,
            &mut self.statistics,
            self.options.maintain_arc_consistency,
        );

        match search.run(brancher, termination) {
            SearchStatus::Solved => {
                let solution = search.assignment().to_assignment(&graph);
                wordfill_assert_moderate!(
                    solution.is_complete(puzzle) && solution.is_consistent(puzzle),
                    "The search reported an assignment which is not a solution"
                );

                brancher.on_solution(&solution);
                SatisfactionResult::Satisfiable(solution)
            }
            SearchStatus::Exhausted => SatisfactionResult::Unsatisfiable,
            SearchStatus::Stopped => SatisfactionResult::Unknown,
        }
    }
}

/// Fills `puzzle` with the default heuristics, returning [`None`] if it cannot be filled.
///
/// # Example
/// ```rust
/// # use wordfill_core::model::Direction;
/// # use wordfill_core::model::Overlap;
/// # use wordfill_core::model::SlotGraph;
/// # use wordfill_core::model::Variable;
/// # use wordfill_core::Word;
/// let x = Variable::new(0, 0, Direction::Across, 3);
/// let y = Variable::new(0, 2, Direction::Down, 3);
/// let puzzle = SlotGraph::new([x, y], ["CAT", "APE", "TOP"], [(x, y, Overlap(2, 0))])
///     .expect("a well-formed puzzle");
///
/// let solution = wordfill_core::solve(&puzzle).expect("the puzzle can be filled");
/// assert_eq!(solution.get(x), Some(&Word::new("CAT")));
/// assert_eq!(solution.get(y), Some(&Word::new("TOP")));
/// ```
pub fn solve(puzzle: &impl Puzzle) -> Option<Assignment> {
    let mut solver = Solver::default();
    let mut brancher = solver.default_brancher();

    // Without a termination condition the search always concludes.
    match solver.satisfy(puzzle, &mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => Some(solution),
        SatisfactionResult::Unsatisfiable | SatisfactionResult::Unknown => None,
    }
}
