use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The solver searches until the grid is filled
/// or every possibility has been exhausted.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
