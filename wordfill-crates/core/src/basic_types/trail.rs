use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::wordfill_assert_simple;

/// A stack of undo records, split into decision levels.
///
/// Every search decision opens a new level; backtracking to a level hands back (newest first)
/// every record which was pushed after that level was opened.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    /// `level_starts[i]` is the length of `records` when level `i + 1` was opened.
    level_starts: Vec<usize>,
    records: Vec<T>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            level_starts: Vec::new(),
            records: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.level_starts.push(self.records.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.level_starts.len()
    }

    /// Drops back to `new_decision_level`, returning the records of the abandoned levels in the
    /// reverse order of insertion.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        wordfill_assert_simple!(new_decision_level < self.get_decision_level());

        let retained = self.level_starts[new_decision_level];
        self.level_starts.truncate(new_decision_level);
        self.records.drain(retained..).rev()
    }

    pub(crate) fn push(&mut self, record: T) {
        self.records.push(record)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_at_the_root_survive_synchronisation() {
        let mut trail = Trail::default();
        trail.push("root removal");

        trail.increase_decision_level();
        trail.push("removal after decision");
        let _ = trail.synchronise(0);

        assert_eq!(&["root removal"], trail.deref());
    }

    #[test]
    fn synchronising_skips_multiple_levels() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.increase_decision_level();
        trail.push(2);
        trail.increase_decision_level();
        trail.push(3);
        trail.increase_decision_level();
        trail.push(4);

        let _ = trail.synchronise(1);

        assert_eq!(&[1, 2], trail.deref());
        assert_eq!(trail.get_decision_level(), 1);
    }

    #[test]
    fn undone_records_are_returned_newest_first() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.increase_decision_level();
        trail.push(2);
        trail.push(3);
        trail.increase_decision_level();
        trail.push(4);

        let popped = trail.synchronise(0).collect::<Vec<_>>();
        assert_eq!(vec![4, 3, 2], popped);
    }
}
