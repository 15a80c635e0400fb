use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two slots `x1`
/// and `x2` which both have 5 candidate words, and the tie-breaker first receives `x2` and then
/// `x1`, then it will return `x2` because it was the first slot with the minimum value.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable together with its value, [None] if no variable has been considered
    /// yet
    selected: Option<(Var, Value)>,
    /// Whether the tie-breaker should find the variable with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let replace = match &self.selected {
            Some((_, selected_value)) => self.direction.is_improvement(&value, selected_value),
            None => true,
        };

        if replace {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::branching::tie_breaking::Direction;
    use crate::branching::tie_breaking::TieBreaker;
    use crate::engine::VariableId;

    #[test]
    fn test_selection_first_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 10);
        breaker.consider(VariableId::new(2), 10);

        assert_eq!(breaker.select(), Some(VariableId::new(0)));
    }

    #[test]
    fn test_selection_picks_lowest_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(VariableId::new(0), 10);
        breaker.consider(VariableId::new(1), 5);
        breaker.consider(VariableId::new(2), 10);

        assert_eq!(breaker.select(), Some(VariableId::new(1)));
    }

    #[test]
    fn selecting_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(VariableId::new(0), 3);
        let _ = breaker.select();

        assert_eq!(breaker.select(), None);
    }
}
