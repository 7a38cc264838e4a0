//! Search space contract trait.

use std::hash::Hash;

use crate::cost::Cost;

/// Trait for worlds that can be searched.
///
/// This is the object form of the closure pair accepted by
/// [`crate::dijkstra`]. Worlds with state (obstacles, bounds, edge tables)
/// implement it and run through [`crate::search_space`].
///
/// # Contract
///
/// - `expand` returns a finite list of `(neighbor, edge_cost, label)` with
///   non-negative edge costs.
/// - `expand` and `is_goal` are deterministic: same node, same answer, same
///   order. The engine's tie-breaking depends on expansion order, so a
///   non-deterministic world gives non-reproducible paths among equal-cost
///   alternatives.
/// - `Node` equality and hashing must agree.
pub trait SearchSpace {
    type Node: Eq + Hash + Clone;
    type Cost: Cost;
    /// Opaque payload carried through to the reconstructed path.
    type Label;

    /// Stable identifier, used in run reports.
    fn space_id(&self) -> &str;

    /// Enumerate the outgoing edges of `node`.
    fn expand(&self, node: &Self::Node) -> Vec<(Self::Node, Self::Cost, Self::Label)>;

    /// Whether `node` is an acceptance state.
    fn is_goal(&self, node: &Self::Node) -> bool;
}
