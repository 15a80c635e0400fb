//! Deciding between candidates which score equally well, such as two slots with the same number
//! of remaining words.
//!
//! A [`TieBreaker`] is fed `(candidate, score)` pairs and keeps only the candidates with the best
//! score seen so far, where "best" is the lowest or highest score depending on its [`Direction`].
//! Among those it picks one: the first one fed ([`InOrderTieBreaker`]) or a uniformly random one
//! ([`RandomTieBreaker`]).
//!
//! ```rust
//! # use wordfill_core::branching::tie_breaking::Direction;
//! # use wordfill_core::branching::tie_breaking::InOrderTieBreaker;
//! # use wordfill_core::branching::tie_breaking::TieBreaker;
//! # use wordfill_core::variables::VariableId;
//! let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
//!
//! breaker.consider(VariableId::new(0), 10);
//! breaker.consider(VariableId::new(1), 5);
//! breaker.consider(VariableId::new(2), 5);
//!
//! // Slots 1 and 2 tie on the lowest score; slot 1 came first.
//! assert_eq!(breaker.select(), Some(VariableId::new(1)));
//! ```

mod in_order_tie_breaker;
mod random_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use random_tie_breaker::RandomTieBreaker;

/// Picks one of the best scoring candidates it has been fed.
pub trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value);

    /// The chosen candidate, or `None` if nothing was considered.
    ///
    /// Forgets every considered candidate, since their scores are stale by the next selection.
    fn select(&mut self) -> Option<Var>;

    fn get_direction(&self) -> Direction;
}

/// Whether a lower or a higher score is better.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

impl Direction {
    /// Whether `value` is strictly better than `incumbent` in this direction.
    fn is_improvement<Value: PartialOrd>(self, value: &Value, incumbent: &Value) -> bool {
        match self {
            Direction::Maximum => value > incumbent,
            Direction::Minimum => value < incumbent,
        }
    }
}
