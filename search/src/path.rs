//! Reconstructed search paths.

use std::collections::HashMap;
use std::hash::Hash;

/// One traversed edge of a found path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<N, C, L> {
    /// The predecessor node.
    pub from: N,
    /// Cost of this edge alone.
    pub edge_cost: C,
    /// Caller payload from the expansion function.
    pub label: L,
    /// The node reached by this edge.
    pub to: N,
}

/// A cheapest path from the start node to the first goal popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath<N, C, L> {
    /// Start through goal, inclusive. Never empty.
    pub nodes: Vec<N>,
    /// Start cost plus the sum of all edge costs.
    pub cost: C,
    /// Traversed edges in start→goal order; `nodes.len() - 1` of them.
    pub steps: Vec<PathStep<N, C, L>>,
}

impl<N, C, L> FoundPath<N, C, L> {
    /// The start node.
    #[must_use]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// The goal node.
    #[must_use]
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// `true` when the start node itself satisfied the goal predicate.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.steps.is_empty()
    }
}

/// The cheapest known way to reach a node: the edge taken and the resulting
/// accumulated cost.
#[derive(Debug)]
pub(crate) struct Predecessor<N, C, L> {
    pub(crate) from: N,
    pub(crate) edge_cost: C,
    pub(crate) label: L,
    pub(crate) cost: C,
}

/// Walk predecessor records back from `goal` to `start`.
///
/// Consumes the records so labels move into the path without cloning.
/// `start` never has a record, and every record points at a node settled
/// strictly earlier, so the walk terminates at `start`.
pub(crate) fn reconstruct<N, C, L>(
    start: N,
    goal: N,
    cost: C,
    mut predecessors: HashMap<N, Predecessor<N, C, L>>,
) -> FoundPath<N, C, L>
where
    N: Eq + Hash + Clone,
{
    let mut steps = Vec::new();
    let mut current = goal;

    while current != start {
        // Every reached node other than start carries a record unless the
        // node type's `Hash` and `Eq` disagree.
        let Some(record) = predecessors.remove(&current) else {
            debug_assert!(false, "reached node has no predecessor record");
            break;
        };
        let next = record.from.clone();
        steps.push(PathStep {
            from: record.from,
            edge_cost: record.edge_cost,
            label: record.label,
            to: current,
        });
        current = next;
    }

    steps.reverse();

    let mut nodes = Vec::with_capacity(steps.len() + 1);
    nodes.push(start);
    nodes.extend(steps.iter().map(|s| s.to.clone()));

    FoundPath { nodes, cost, steps }
}
