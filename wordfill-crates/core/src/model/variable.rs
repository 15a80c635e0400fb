use std::fmt::Display;
use std::fmt::Formatter;

/// The orientation of a slot in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A slot of the puzzle which has to be filled with a word; it starts at (`row`, `col`) and runs
/// for `length` cells in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Variable {
        Variable {
            row,
            col,
            direction,
            length,
        }
    }

    /// The `(row, col)` cells covered by the slot, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|offset| match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        })
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_the_direction() {
        let across = Variable::new(1, 2, Direction::Across, 3);
        let down = Variable::new(1, 2, Direction::Down, 2);

        assert_eq!(across.cells().collect::<Vec<_>>(), vec![(1, 2), (1, 3), (1, 4)]);
        assert_eq!(down.cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn variables_differing_in_one_field_are_distinct() {
        let variable = Variable::new(0, 0, Direction::Across, 3);

        assert_ne!(variable, Variable::new(0, 0, Direction::Down, 3));
        assert_ne!(variable, Variable::new(0, 0, Direction::Across, 4));
        assert_eq!(variable.to_string(), "(0, 0) across : 3");
    }
}
