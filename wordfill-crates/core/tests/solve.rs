#![cfg(test)]

use wordfill_core::model::Crossword;
use wordfill_core::model::Direction;
use wordfill_core::model::Overlap;
use wordfill_core::model::SlotGraph;
use wordfill_core::model::Variable;
use wordfill_core::solve;
use wordfill_core::Word;

fn crossword(rows: &[&str], words: &[&str]) -> Crossword {
    let structure = rows
        .iter()
        .map(|row| row.chars().map(|cell| cell == '_').collect())
        .collect();
    Crossword::new(structure, words).expect("valid crossword")
}

#[test]
fn single_slot_without_overlaps_gets_any_word() {
    let x = Variable::new(0, 0, Direction::Across, 3);
    let puzzle = SlotGraph::new([x], ["cat", "dog"], []).expect("valid puzzle");

    let solution = solve(&puzzle).expect("a word fits");

    assert_eq!(solution.len(), 1);
    let word = solution.get(x).expect("x is filled");
    assert!(*word == Word::new("cat") || *word == Word::new("dog"));
}

#[test]
fn slots_without_a_common_first_letter_cannot_be_filled() {
    let x = Variable::new(0, 0, Direction::Across, 3);
    let y = Variable::new(0, 0, Direction::Down, 3);
    let puzzle =
        SlotGraph::new([x, y], ["cat", "dog"], [(x, y, Overlap(0, 0))]).expect("valid puzzle");

    assert_eq!(solve(&puzzle), None);
}

#[test]
fn shared_letter_determines_the_fill() {
    let x = Variable::new(0, 0, Direction::Across, 3);
    let y = Variable::new(0, 1, Direction::Down, 3);
    let puzzle = SlotGraph::new([x, y], ["cat", "ape", "top"], [(x, y, Overlap(1, 0))])
        .expect("valid puzzle");

    let solution = solve(&puzzle).expect("cat and ape fit");

    assert_eq!(solution.get(x), Some(&Word::new("cat")));
    assert_eq!(solution.get(y), Some(&Word::new("ape")));
}

#[test]
fn ring_is_filled_consistently() {
    let puzzle = crossword(&["___", "_#_", "___"], &["CAT", "COW", "WEB", "TAB", "DOG"]);

    let solution = solve(&puzzle).expect("the ring can be filled");

    assert!(solution.is_complete(&puzzle));
    assert!(solution.is_consistent(&puzzle));
}

#[test]
fn a_word_is_never_placed_twice() {
    // Filling every slot with "AA" would satisfy all overlaps
    let puzzle = crossword(&["__", "__"], &["AA"]);

    assert_eq!(solve(&puzzle), None);
}

#[test]
fn words_of_the_wrong_length_are_never_placed() {
    let puzzle = crossword(&["____"], &["CAT", "TOAST", "CATS"]);

    let solution = solve(&puzzle).expect("CATS fits");

    assert_eq!(
        solution.get(Variable::new(0, 0, Direction::Across, 4)),
        Some(&Word::new("CATS"))
    );
}

#[test]
fn grid_without_slots_is_trivially_filled() {
    let puzzle = crossword(&["_#", "#_"], &["CAT"]);

    let solution = solve(&puzzle).expect("nothing has to be filled");

    assert!(solution.is_empty());
}

#[test]
fn slot_without_candidates_cannot_be_filled() {
    let puzzle = crossword(&["____"], &["CAT", "DOG", "TOAST"]);

    assert_eq!(solve(&puzzle), None);
}
