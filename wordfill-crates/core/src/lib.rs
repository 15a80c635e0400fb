//! # wordfill
//! A constraint solver which fills crossword grids with words.
//!
//! A puzzle consists of slots, a vocabulary and the cells which slots share (see
//! [`model::Puzzle`]). The solver first prunes the candidate words of every slot until every pair
//! of crossing slots is arc consistent, and then performs a backtracking search which fills the
//! most constrained slot first and tries its least constraining words first.
//!
//! # Filling a grid
//! The simplest entry point is [`solve`]:
//! ```rust
//! # use wordfill_core::model::Crossword;
//! // `_` marks a cell which has to be filled, `#` a blocked cell
//! let structure = ["___", "_#_", "___"]
//!     .iter()
//!     .map(|row| row.chars().map(|cell| cell == '_').collect())
//!     .collect();
//! let crossword = Crossword::new(structure, ["CAT", "COW", "WEB", "TAB", "DOG"])
//!     .expect("a well-formed crossword");
//!
//! let solution = wordfill_core::solve(&crossword).expect("the crossword can be filled");
//! assert_eq!(solution.len(), 4);
//! ```
//!
//! The [`Solver`] gives control over the heuristics (see [`branching`]), the inference during
//! search (see [`options::SolverOptions`]) and when to give up (see [`termination`]):
//! ```rust
//! # use std::time::Duration;
//! # use wordfill_core::branching::branchers::DynamicBrancher;
//! # use wordfill_core::model::Crossword;
//! # use wordfill_core::options::SolverOptions;
//! # use wordfill_core::options::ValueSelectionStrategy;
//! # use wordfill_core::options::VariableSelectionStrategy;
//! # use wordfill_core::results::SatisfactionResult;
//! # use wordfill_core::termination::TimeBudget;
//! # use wordfill_core::Solver;
//! # let structure = ["___", "_#_", "___"]
//! #     .iter()
//! #     .map(|row| row.chars().map(|cell| cell == '_').collect())
//! #     .collect();
//! # let crossword = Crossword::new(structure, ["CAT", "COW", "WEB", "TAB", "DOG"]).unwrap();
//! let mut solver = Solver::with_options(SolverOptions {
//!     maintain_arc_consistency: true,
//!     ..Default::default()
//! });
//! let mut brancher = DynamicBrancher::new(
//!     VariableSelectionStrategy::FirstFail.create_selector(None),
//!     ValueSelectionStrategy::InDomainOrder.create_selector(),
//! );
//! let mut termination = TimeBudget::starting_now(Duration::from_secs(1));
//!
//! let result = solver.satisfy(&crossword, &mut brancher, &mut termination);
//! assert!(matches!(result, SatisfactionResult::Satisfiable(_)));
//! ```
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;

pub mod branching;
pub mod model;
pub mod statistics;

pub use convert_case;
pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use wordfill_core::Solver;`
// vs.
// `use wordfill_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::solve;
pub use crate::api::solver::Solver;
pub use crate::basic_types::Assignment;
pub use crate::basic_types::Random;
pub use crate::basic_types::Word;
pub use crate::basic_types::WordId;
pub use crate::branching::branchers::DefaultBrancher;
