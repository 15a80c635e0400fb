//! # wordfill-solver
//! Reads crossword structures and word lists from text files, fills them with
//! [`wordfill_core`] and renders the result as text.
//!
//! ```rust
//! # use wordfill_solver::parsers::parse_crossword;
//! # use wordfill_solver::rendering::render;
//! let structure = "___\n_#_\n___\n";
//! let words = "cat\ncow\nweb\ntab\ndog\n";
//!
//! let crossword = parse_crossword(structure.as_bytes(), words.as_bytes())
//!     .expect("well-formed input");
//! let solution = wordfill_solver::core::solve(&crossword).expect("the grid can be filled");
//!
//! let rendered = render(&crossword, &solution);
//! assert_eq!(rendered.lines().count(), 3);
//! ```
pub mod parsers;
pub mod rendering;

pub use wordfill_core as core;
