use super::Direction;
use super::TieBreaker;
use crate::basic_types::Random;

/// A [`TieBreaker`] which picks uniformly at random among the slots sharing the best value.
///
/// The slots are considered one at a time (reservoir sampling): a slot with a strictly better value
/// replaces the current pick and restarts the count, a slot with an equal value replaces the
/// current pick with probability `1 / n`, where `n` is the number of equally good slots seen so
/// far. Slots with a worse value are ignored.
pub struct RandomTieBreaker<Var, Value> {
    /// The current pick and its value
    selected: Option<(Var, Value)>,
    rng: Box<dyn Random>,
    /// How many slots share the value of the current pick
    num_tied: usize,
    direction: Direction,
}

impl<Var, Value> std::fmt::Debug for RandomTieBreaker<Var, Value> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomTieBreaker")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl<Var, Value> RandomTieBreaker<Var, Value> {
    pub fn new(direction: Direction, rng: Box<dyn Random>) -> Self {
        Self {
            selected: None,
            rng,
            num_tied: 0,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for RandomTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let Some((selected_variable, selected_value)) = self.selected.as_mut() else {
            self.num_tied = 1;
            self.selected = Some((variable, value));
            return;
        };

        if self.direction.is_improvement(&value, selected_value) {
            self.num_tied = 1;
            self.selected = Some((variable, value));
        } else if value == *selected_value {
            self.num_tied += 1;
            if self.rng.generate_bool(1.0 / self.num_tied as f64) {
                *selected_variable = variable;
            }
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.num_tied = 0;
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::RandomTieBreaker;
    use crate::basic_types::tests::TestRandom;
    use crate::branching::tie_breaking::Direction;
    use crate::branching::tie_breaking::TieBreaker;

    fn breaker(direction: Direction, bools: Vec<bool>) -> RandomTieBreaker<char, usize> {
        RandomTieBreaker::new(
            direction,
            Box::new(TestRandom {
                bools,
                ..Default::default()
            }),
        )
    }

    #[test]
    fn nothing_is_selected_before_anything_is_considered() {
        let mut breaker = breaker(Direction::Minimum, vec![]);

        assert_eq!(breaker.select(), None);
        breaker.consider('x', 4);
        assert_eq!(breaker.select(), Some('x'));
        assert_eq!(breaker.select(), None);
    }

    #[test]
    fn strictly_better_values_win_without_randomness() {
        let mut breaker = breaker(Direction::Minimum, vec![]);

        breaker.consider('x', 4);
        breaker.consider('y', 2);
        breaker.consider('z', 7);

        assert_eq!(breaker.select(), Some('y'));
    }

    #[test]
    fn a_tie_is_decided_by_the_generator() {
        let mut replaced = breaker(Direction::Maximum, vec![true]);
        replaced.consider('x', 3);
        replaced.consider('y', 3);
        assert_eq!(replaced.select(), Some('y'));

        let mut kept = breaker(Direction::Maximum, vec![false]);
        kept.consider('x', 3);
        kept.consider('y', 3);
        assert_eq!(kept.select(), Some('x'));
    }

    #[test]
    fn a_better_value_resets_the_tie_count() {
        // Only the tie between `y` and `z` consults the generator
        let mut breaker = breaker(Direction::Minimum, vec![false, true]);

        breaker.consider('w', 5);
        breaker.consider('x', 5);
        breaker.consider('y', 1);
        breaker.consider('z', 1);

        assert_eq!(breaker.select(), Some('z'));
    }
}
