use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{Node, Weight};

/// Entry of a [`MinCostQueue`]
#[derive(Debug, Copy, Clone)]
struct Entry {
    cost: Weight,
    seq: u64,
    node: Node,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smaller costs and earlier pushes are "greater"
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// A lazy min-priority queue of `(node, cost)` entries.
///
/// Nodes may be pushed multiple times; it is up to the caller to discard stale entries.
/// Entries of equal cost are popped in the order they were pushed.
#[derive(Debug, Default)]
pub(crate) struct MinCostQueue {
    heap: BinaryHeap<Entry>,
    pushed: u64,
}

impl MinCostQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node, cost: Weight) {
        self.heap.push(Entry {
            cost,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    /// Removes and returns the entry with minimum cost
    pub fn pop(&mut self) -> Option<(Node, Weight)> {
        self.heap.pop().map(|e| (e.node, e.cost))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
