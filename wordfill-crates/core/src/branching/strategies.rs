//! Runtime selection of the heuristics used by the search.
use crate::basic_types::Random;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::RandomTieBreaker;
use crate::branching::value_selection::InDomainOrder;
use crate::branching::value_selection::InDomainRandom;
use crate::branching::value_selection::LeastConstrainingValue;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::MostConstrained;
use crate::branching::variable_selection::VariableSelector;

/// Determines which unfilled slot the search fills next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelectionStrategy {
    /// The slot with the fewest candidate words; ties go to the slot crossing the most other
    /// slots.
    #[default]
    MostConstrained,
    /// The slot with the fewest candidate words.
    FirstFail,
    /// The first unfilled slot of the puzzle.
    InputOrder,
}

impl VariableSelectionStrategy {
    /// Creates the selector; if `tie_breaking` is provided, remaining ties are broken randomly
    /// instead of in puzzle order.
    pub fn create_selector(
        self,
        tie_breaking: Option<Box<dyn Random>>,
    ) -> Box<dyn VariableSelector> {
        match (self, tie_breaking) {
            (VariableSelectionStrategy::MostConstrained, None) => {
                Box::new(MostConstrained::new())
            }
            (VariableSelectionStrategy::MostConstrained, Some(rng)) => Box::new(
                MostConstrained::with_tie_breaker(RandomTieBreaker::new(Direction::Minimum, rng)),
            ),
            (VariableSelectionStrategy::FirstFail, None) => Box::new(FirstFail::new()),
            (VariableSelectionStrategy::FirstFail, Some(rng)) => Box::new(
                FirstFail::with_tie_breaker(RandomTieBreaker::new(Direction::Minimum, rng)),
            ),
            (VariableSelectionStrategy::InputOrder, _) => Box::new(InputOrder),
        }
    }
}

/// Determines the order in which the candidate words of a slot are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelectionStrategy {
    /// Words ruling out the fewest candidates of the crossing slots first.
    #[default]
    LeastConstrainingValue,
    /// Words in the order of the vocabulary.
    InDomainOrder,
    /// Words in a random order.
    InDomainRandom,
}

impl ValueSelectionStrategy {
    pub fn create_selector(self) -> Box<dyn ValueSelector> {
        match self {
            ValueSelectionStrategy::LeastConstrainingValue => Box::new(LeastConstrainingValue),
            ValueSelectionStrategy::InDomainOrder => Box::new(InDomainOrder),
            ValueSelectionStrategy::InDomainRandom => Box::new(InDomainRandom),
        }
    }
}
