use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-heap frontier of (vertex, distance) candidates for Dijkstra.
///
/// There is no decrease-key: every improvement pushes a fresh entry, so the
/// heap may hold several stale entries for the same vertex. The engine skips
/// entries whose vertex is already settled. The number of insertions can
/// therefore exceed the vertex count, and that shape is part of the observable
/// trace, not an inefficiency to optimize away.
#[derive(Debug, Default)]
pub struct Frontier<W>
where
    W: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> Frontier<W>
where
    W: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a candidate; duplicates for an already-queued vertex are kept.
    pub fn push(&mut self, vertex: usize, distance: W) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes a candidate with the minimum distance. Ties break on the lower
    /// vertex id, which is arbitrary as far as correctness goes.
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// Returns the minimum candidate without removing it.
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, vertex))| (*vertex, *distance))
    }
}
