use super::Direction;
use super::Overlap;
use super::Puzzle;
use super::PuzzleError;
use super::SlotGraph;
use super::Variable;
use crate::basic_types::HashMap;
use crate::basic_types::Word;

/// A crossword grid together with its vocabulary.
///
/// Every maximal horizontal or vertical run of at least two open cells is a slot. Slots are
/// numbered in row-major order of their starting cell, with the across slot of a cell preceding its
/// down slot. Two slots overlap when they cover the same cell.
#[derive(Clone, Debug)]
pub struct Crossword {
    height: usize,
    width: usize,
    open: Vec<Vec<bool>>,
    slots: SlotGraph,
}

impl Crossword {
    /// Creates a crossword from a grid in which `true` marks a cell that has to be filled.
    ///
    /// Rows shorter than the widest row are padded with blocked cells.
    pub fn new(
        structure: Vec<Vec<bool>>,
        words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Crossword, PuzzleError> {
        let height = structure.len();
        let width = structure.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyStructure);
        }

        let open = structure
            .into_iter()
            .map(|mut row| {
                row.resize(width, false);
                row
            })
            .collect::<Vec<_>>();

        let is_open = |row: usize, col: usize| row < height && col < width && open[row][col];

        let mut variables = Vec::new();
        for row in 0..height {
            for col in 0..width {
                if !is_open(row, col) {
                    continue;
                }

                let starts_across = col == 0 || !is_open(row, col - 1);
                if starts_across {
                    let length = (col..width).take_while(|&c| is_open(row, c)).count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Across, length));
                    }
                }

                let starts_down = row == 0 || !is_open(row - 1, col);
                if starts_down {
                    let length = (row..height).take_while(|&r| is_open(r, col)).count();
                    if length > 1 {
                        variables.push(Variable::new(row, col, Direction::Down, length));
                    }
                }
            }
        }

        // A cell belongs to at most one across slot and at most one down slot.
        let mut covering: HashMap<(usize, usize), Vec<(Variable, usize)>> = HashMap::default();
        for &variable in variables.iter() {
            for (offset, cell) in variable.cells().enumerate() {
                covering.entry(cell).or_default().push((variable, offset));
            }
        }

        let overlaps = covering
            .values()
            .filter_map(|slots| match slots.as_slice() {
                [(x, ix), (y, iy)] => Some((*x, *y, Overlap(*ix, *iy))),
                _ => None,
            })
            .collect::<Vec<_>>();

        Ok(Crossword {
            height,
            width,
            slots: SlotGraph::new(variables, words, overlaps)?,
            open,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at (`row`, `col`) has to be filled; cells outside the grid are blocked.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row][col]
    }
}

impl Puzzle for Crossword {
    fn variables(&self) -> &[Variable] {
        self.slots.variables()
    }

    fn vocabulary(&self) -> &[Word] {
        self.slots.vocabulary()
    }

    fn neighbors(&self, variable: Variable) -> &[Variable] {
        self.slots.neighbors(variable)
    }

    fn overlap(&self, x: Variable, y: Variable) -> Option<Overlap> {
        self.slots.overlap(x, y)
    }
}
