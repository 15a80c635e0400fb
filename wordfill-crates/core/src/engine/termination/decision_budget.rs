use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the search has placed `budget` words.
#[derive(Debug, Copy, Clone)]
pub struct DecisionBudget {
    budget: u64,
    num_decisions: u64,
}

impl DecisionBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_decisions: 0,
        }
    }
}

impl TerminationCondition for DecisionBudget {
    fn should_stop(&mut self) -> bool {
        self.num_decisions >= self.budget
    }

    fn decision_has_been_made(&mut self) {
        self.num_decisions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_the_budget_is_spent() {
        let mut termination = DecisionBudget::new(2);

        assert!(!termination.should_stop());
        termination.decision_has_been_made();
        assert!(!termination.should_stop());
        termination.decision_has_been_made();
        assert!(termination.should_stop());
    }
}
