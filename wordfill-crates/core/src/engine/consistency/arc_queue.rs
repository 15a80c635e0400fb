use std::collections::VecDeque;

use crate::basic_types::HashSet;
use crate::engine::VariableId;
use crate::wordfill_assert_moderate;

/// The arc from `x` to `y`: revising it removes the words of `x` which have no support in `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedArc {
    pub x: VariableId,
    pub y: VariableId,
}

impl DirectedArc {
    pub fn new(x: VariableId, y: VariableId) -> Self {
        DirectedArc { x, y }
    }
}

/// A first-in first-out worklist of arcs in which every arc is present at most once.
#[derive(Debug, Default)]
pub(crate) struct ArcQueue {
    queue: VecDeque<DirectedArc>,
    present_arcs: HashSet<DirectedArc>,
}

impl ArcQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.present_arcs.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Adds `arc` to the back of the queue unless it is already waiting; returns whether it was
    /// added.
    pub(crate) fn enqueue(&mut self, arc: DirectedArc) -> bool {
        if !self.present_arcs.insert(arc) {
            return false;
        }
        self.queue.push_back(arc);
        true
    }

    pub(crate) fn pop(&mut self) -> Option<DirectedArc> {
        let arc = self.queue.pop_front()?;
        let _ = self.present_arcs.remove(&arc);

        wordfill_assert_moderate!(self.queue.len() == self.present_arcs.len());
        Some(arc)
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.present_arcs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(x: u32, y: u32) -> DirectedArc {
        DirectedArc::new(VariableId::new(x), VariableId::new(y))
    }

    #[test]
    fn arcs_are_popped_in_insertion_order() {
        let mut queue = ArcQueue::default();

        let _ = queue.enqueue(arc(0, 1));
        let _ = queue.enqueue(arc(1, 0));
        let _ = queue.enqueue(arc(2, 1));

        assert_eq!(queue.pop(), Some(arc(0, 1)));
        assert_eq!(queue.pop(), Some(arc(1, 0)));
        assert_eq!(queue.pop(), Some(arc(2, 1)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn waiting_arcs_are_not_enqueued_twice() {
        let mut queue = ArcQueue::default();

        assert!(queue.enqueue(arc(0, 1)));
        assert!(!queue.enqueue(arc(0, 1)));
        assert_eq!(queue.len(), 1);

        let _ = queue.pop();
        assert!(queue.is_empty());
        assert!(queue.enqueue(arc(0, 1)));
    }
}
