//! Min-cost frontier with lazy decrease-key.
//!
//! Improvements are pushed as new entries instead of updating existing ones.
//! The superseded entries stay in the heap and are discarded by the caller
//! when popped (the settled-set check). Entries are keyed on cost alone; the
//! order among equal costs is whatever the heap produces and is not part of
//! the contract.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cost::Cost;

/// A frontier entry wrapping a node with its accumulated cost.
///
/// `BinaryHeap` is a max-heap, so `Ord` is reversed to pop the lowest cost
/// first. Costs only need `PartialOrd`; unordered pairs compare as equal.
#[derive(Debug)]
struct FrontierEntry<C, N> {
    cost: C,
    node: N,
}

impl<C: PartialOrd, N> PartialEq for FrontierEntry<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd, N> Eq for FrontierEntry<C, N> {}

impl<C: PartialOrd, N> PartialOrd for FrontierEntry<C, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd, N> Ord for FrontierEntry<C, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// Best-first frontier of `(cost, node)` entries.
///
/// May hold several entries for the same node; at most one of them is
/// current, the rest are stale.
#[derive(Debug)]
pub struct Frontier<C, N> {
    heap: BinaryHeap<FrontierEntry<C, N>>,
    high_water: usize,
    pushed: u64,
}

impl<C: Cost, N> Frontier<C, N> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
            pushed: 0,
        }
    }

    /// Push an entry. Never deduplicates.
    pub fn push(&mut self, cost: C, node: N) {
        self.heap.push(FrontierEntry { cost, node });
        self.pushed += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the lowest-cost entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<(C, N)> {
        self.heap.pop().map(|e| (e.cost, e.node))
    }

    /// Current number of entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Total entries ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}

impl<C: Cost, N> Default for Frontier<C, N> {
    fn default() -> Self {
        Self::new()
    }
}
