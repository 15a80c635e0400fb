//! Text rendering of (partially) filled crosswords.
use wordfill_core::model::Crossword;
use wordfill_core::results::Assignment;

/// The character printed for a blocked cell.
pub const BLOCKED_CELL: char = '█';

/// Places the letters of `assignment` in the grid of `crossword`; cells which are blocked or not
/// covered by a filled slot are [`None`].
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; crossword.width()]; crossword.height()];

    for (variable, word) in assignment.iter() {
        for ((row, col), &letter) in variable.cells().zip(word.letters()) {
            letters[row][col] = Some(letter);
        }
    }

    letters
}

/// Renders the grid with one line per row: blocked cells are printed as [`BLOCKED_CELL`] and open
/// cells which are not filled as a space.
pub fn render(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);

    letters
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let mut line = cells
                .iter()
                .enumerate()
                .map(|(col, letter)| {
                    if crossword.is_open(row, col) {
                        letter.unwrap_or(' ')
                    } else {
                        BLOCKED_CELL
                    }
                })
                .collect::<String>();
            line.push('\n');
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wordfill_core::model::Direction;
    use wordfill_core::model::Variable;
    use wordfill_core::Word;

    use super::*;

    fn ring() -> Crossword {
        let structure = ["___", "_#_", "___"]
            .iter()
            .map(|row| row.chars().map(|cell| cell == '_').collect())
            .collect();
        Crossword::new(structure, ["CAT", "COW", "WEB", "TAB"]).expect("valid crossword")
    }

    #[test]
    fn filled_grid_is_rendered_row_by_row() {
        let crossword = ring();
        let assignment = [
            (Variable::new(0, 0, Direction::Across, 3), "CAT"),
            (Variable::new(0, 0, Direction::Down, 3), "COW"),
            (Variable::new(0, 2, Direction::Down, 3), "TAB"),
            (Variable::new(2, 0, Direction::Across, 3), "WEB"),
        ]
        .into_iter()
        .map(|(variable, word)| (variable, Word::new(word)))
        .collect::<Assignment>();

        assert_eq!(render(&crossword, &assignment), "CAT\nO█A\nWEB\n");
    }

    #[test]
    fn unfilled_cells_are_blank() {
        let crossword = ring();
        let assignment = [(Variable::new(0, 0, Direction::Across, 3), Word::new("CAT"))]
            .into_iter()
            .collect::<Assignment>();

        assert_eq!(render(&crossword, &assignment), "CAT\n █ \n   \n");
    }
}
