//! Bounded top-k selection over a stream of scored identifiers.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::types::{RankedResult, SimilarityScore};

/// Heap entry ordered by rank: a greater entry ranks higher.
#[derive(Debug)]
struct Ranked<I> {
    score: f64,
    id: I,
}

impl<I: Ord> Ord for Ranked<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal scores: the lower id ranks higher.
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl<I: Ord> PartialOrd for Ranked<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Ord> PartialEq for Ranked<I> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<I: Ord> Eq for Ranked<I> {}

/// Keeps the `k` highest-ranked `(id, score)` pairs seen so far.
///
/// Backed by a min-heap whose root is the lowest-ranked retained entry, so
/// each push costs O(log k) and memory stays O(k).
///
/// Ordering is total: scores compare with [`f64::total_cmp`], and among equal
/// scores the **lower identifier ranks higher**. When an equal-score entry has
/// to be evicted, the one with the higher identifier goes.
#[derive(Debug)]
pub struct TopKSelector<I> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked<I>>>,
}

impl<I: Ord> TopKSelector<I> {
    /// The heap grows with pushes, so any `capacity` (even `usize::MAX`) is
    /// accepted without allocating up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::new(),
        }
    }

    /// Like [`new`](Self::new), preallocating for at most `expected` offers.
    pub fn with_expected(capacity: usize, expected: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(expected).saturating_add(1)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer one entry; the lowest-ranked entry is evicted once more than
    /// `capacity` are held.
    pub fn push(&mut self, id: I, score: f64) {
        self.push_ranked(Ranked { score, id });
    }

    fn push_ranked(&mut self, entry: Ranked<I>) {
        if self.capacity == 0 {
            return;
        }
        self.heap.push(Reverse(entry));
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// Fold another selector's retained entries into this one.
    ///
    /// Merging per-shard selectors yields the same top-k as pushing every
    /// entry into a single selector.
    pub fn merge(&mut self, other: TopKSelector<I>) {
        for Reverse(entry) in other.heap {
            self.push_ranked(entry);
        }
    }

    /// Consume the selector, returning its entries highest rank first.
    pub fn into_sorted_vec(mut self) -> RankedResult<I> {
        let mut out = Vec::with_capacity(self.heap.len());
        // Pops come out lowest rank first.
        while let Some(Reverse(Ranked { score, id })) = self.heap.pop() {
            out.push(SimilarityScore { id, score });
        }
        out.reverse();
        out
    }
}

impl<I: Ord> Extend<(I, f64)> for TopKSelector<I> {
    fn extend<T: IntoIterator<Item = (I, f64)>>(&mut self, iter: T) {
        for (id, score) in iter {
            self.push(id, score);
        }
    }
}
