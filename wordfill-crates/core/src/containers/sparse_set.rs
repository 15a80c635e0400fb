//! A set for keeping track of which words are still part of the domain of a slot; it allows O(1)
//! removals, O(1) membership queries and O(|D|) traversal of the domain (where D are the words
//! which are currently in the domain).
//!
//! # Theoretical
//! The sparse-set keeps track of the number of elements which are in the domain
//! ([`SparseSet::len`]) and it guarantees that the first [`SparseSet::len`] stored values are in
//! the domain. To remove a value, the element at index `i` is swapped with the last element which
//! is still in the domain and the size is afterwards decremented by 1. The removed element stays
//! stored behind the size pointer, which means that undoing a sequence of removals is simply
//! moving the size pointer back (see [`SparseSet::restore`]), as long as the undo happens in the
//! reverse order of the removals.
//!
//! # Bibliography
//! \[1\] V. le C. de Saint-Marcq, P. Schaus, C. Solnon, and C. Lecoutre, ‘Sparse-sets for domain
//! implementation’, in CP workshop on Techniques foR Implementing Constraint programming Systems
//! (TRICS), 2013, pp. 1–10.

use crate::wordfill_assert_moderate;
use crate::wordfill_assert_simple;

/// Marks an element of the universe which was never part of this set.
const NOT_PRESENT: usize = usize::MAX;

/// A backtrackable set based on [\[1\]](https://hal.science/hal-01339250/document). See the module
/// level documentation for more information.
///
/// It is required that each element of the universe can be mapped to a unique index in the range
/// `[0, universe_size)` by `mapping`.
#[derive(Debug, Clone)]
pub(crate) struct SparseSet<T> {
    /// The number of elements which are currently in the domain
    size: usize,
    /// The elements which were ever part of the set; the first [`size`][SparseSet::size] are
    /// currently in the set
    domain: Vec<T>,
    /// Stores for each element of the universe its index in [`domain`][SparseSet::domain], or
    /// [`NOT_PRESENT`] if the element was never inserted
    indices: Vec<usize>,
    /// An injective function from an element to its index in the universe
    mapping: fn(&T) -> usize,
}

impl<T> SparseSet<T> {
    /// Creates a set containing `input`, where every element maps to an index below
    /// `universe_size`.
    pub(crate) fn new(input: Vec<T>, universe_size: usize, mapping: fn(&T) -> usize) -> Self {
        let mut indices = vec![NOT_PRESENT; universe_size];
        for (position, element) in input.iter().enumerate() {
            let index = mapping(element);
            wordfill_assert_simple!(
                index < universe_size,
                "An element of the sparse set maps outside of the universe"
            );
            wordfill_assert_simple!(
                indices[index] == NOT_PRESENT,
                "The sparse set was provided with a duplicate element"
            );
            indices[index] = position;
        }

        SparseSet {
            size: input.len(),
            domain: input,
            indices,
            mapping,
        }
    }

    /// Determines whether the domain represented by the [`SparseSet`] is empty
    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns how many elements are part of the domain
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    /// The elements which are currently part of the domain (in no particular order).
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.domain[..self.size]
    }

    pub(crate) fn contains(&self, element: &T) -> bool {
        self.indices
            .get((self.mapping)(element))
            .is_some_and(|&position| position < self.size)
    }

    /// Swaps the elements at positions `i` and `j` in [`domain`][SparseSet::domain] and swaps the
    /// corresponding indices in [`indices`][SparseSet::indices]
    fn swap(&mut self, i: usize, j: usize) {
        self.domain.swap(i, j);
        self.indices[(self.mapping)(&self.domain[i])] = i;
        self.indices[(self.mapping)(&self.domain[j])] = j;
    }

    /// Removes `to_remove` from the domain; returns whether the element was part of the domain
    /// before the call.
    pub(crate) fn remove(&mut self, to_remove: &T) -> bool {
        if !self.contains(to_remove) {
            return false;
        }

        let position = self.indices[(self.mapping)(to_remove)];
        self.size -= 1;
        self.swap(position, self.size);

        wordfill_assert_moderate!(!self.contains(to_remove));
        true
    }

    /// Moves the size pointer back to `size`, which re-inserts the elements removed since the set
    /// had that size.
    pub(crate) fn restore(&mut self, size: usize) {
        wordfill_assert_simple!(
            self.size <= size && size <= self.domain.len(),
            "A sparse set can only be restored to a size between its current and original size"
        );
        self.size = size;
    }
}
