use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use hashbrown::HashSet;

use crate::graph::{Edge, Weight};

/// A min-priority queue of edges, ordered by weight, that refuses duplicates.
///
/// An edge is a duplicate if an equal edge (same weight, same endpoints) is currently
/// queued. Such offers are dropped silently, which bounds the queue by the number of
/// distinct edges.
///
/// # Time Complexity
/// - `offer`: O(log n) per edge
/// - `poll`: O(log n)
///
/// Edges of equal weight come out in the order they were offered.
pub struct CandidateQueue {
    heap: BinaryHeap<Reverse<QueuedEdge>>,
    queued: HashSet<Edge>,
    next_sequence: u64,
}

/// Heap slot: orders by weight, then by offer sequence.
struct QueuedEdge {
    edge: Edge,
    sequence: u64,
}

impl QueuedEdge {
    fn rank(&self) -> (Weight, u64) {
        (self.edge.weight(), self.sequence)
    }
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for QueuedEdge {}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl CandidateQueue {
    pub fn new() -> Self {
        CandidateQueue {
            heap: BinaryHeap::new(),
            queued: HashSet::new(),
            next_sequence: 0,
        }
    }

    /// Offers a batch of edges, skipping any that are already queued.
    ///
    /// # Arguments
    /// * `edges` - Edges to enqueue, may be empty
    ///
    /// # Returns
    /// The number of edges actually added (excluding duplicates)
    pub fn offer(&mut self, edges: &[Edge]) -> usize {
        let mut added_count = 0;
        for &edge in edges {
            if self.offer_one(edge) {
                added_count += 1;
            }
        }
        added_count
    }

    /// Offers a single edge.
    ///
    /// # Returns
    /// `true` if the edge was enqueued, `false` if an equal edge was already waiting
    pub fn offer_one(&mut self, edge: Edge) -> bool {
        if !self.queued.insert(edge) {
            return false;
        }
        self.heap.push(Reverse(QueuedEdge {
            edge,
            sequence: self.next_sequence,
        }));
        self.next_sequence += 1;
        true
    }

    /// Removes and returns a minimum-weight edge, or `None` once the queue is drained.
    pub fn poll(&mut self) -> Option<Edge> {
        let Reverse(QueuedEdge { edge, .. }) = self.heap.pop()?;
        self.queued.remove(&edge);
        Some(edge)
    }

    /// A minimum-weight edge, left in place.
    pub fn peek(&self) -> Option<&Edge> {
        self.heap.peek().map(|Reverse(queued)| &queued.edge)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl Default for CandidateQueue {
    fn default() -> Self {
        CandidateQueue::new()
    }
}
