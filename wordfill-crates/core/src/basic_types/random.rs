use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::wordfill_assert_moderate;

/// The source of the random choices made by the randomised tie-breaker and value selector.
///
/// The search itself is deterministic. Hiding the generator behind this trait lets tests replay a
/// fixed list of outcomes.
///
/// ```rust
/// # use rand::rngs::SmallRng;
/// # use rand::SeedableRng;
/// # use wordfill_core::Random;
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// let words = ["ACE", "BAT", "CAT"];
/// assert!(rng.generate_usize_in_range(0..words.len()) < words.len());
/// assert!(rng.generate_bool(1.0));
/// ```
pub trait Random: Debug {
    /// `true` with probability `probability`, which lies in `[0, 1]`.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// A value drawn uniformly from `range`.
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        wordfill_assert_moderate!(
            (0.0..=1.0).contains(&probability),
            "{probability} is not a probability"
        );

        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use super::Random;
    use crate::wordfill_assert_simple;

    /// Replays `usizes` and `bools` from the front; panics once a list runs out.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
        pub(crate) bools: Vec<bool>,
    }

    impl Random for TestRandom {
        fn generate_bool(&mut self, probability: f64) -> bool {
            wordfill_assert_simple!((0.0..=1.0).contains(&probability));
            self.bools.remove(0)
        }

        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let outcome = self.usizes.remove(0);
            wordfill_assert_simple!(
                range.contains(&outcome),
                "Test outcome {outcome} lies outside {range:?}"
            );
            outcome
        }
    }
}
