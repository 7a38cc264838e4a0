//! `TableGraph`: an explicit, labelled edge list.
//!
//! The smallest possible world: named nodes, directed weighted edges, and a
//! goal set. Edges leave a node in insertion order. Labels are
//! `"from->to"`.

use std::collections::{BTreeMap, BTreeSet};

use wayfind_search::SearchSpace;

/// A directed graph given by its edge table.
#[derive(Debug, Clone, Default)]
pub struct TableGraph {
    adjacency: BTreeMap<&'static str, Vec<(&'static str, u64)>>,
    goals: BTreeSet<&'static str>,
}

impl TableGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge. Parallel edges are kept.
    #[must_use]
    pub fn edge(mut self, from: &'static str, to: &'static str, cost: u64) -> Self {
        self.adjacency.entry(from).or_default().push((to, cost));
        self
    }

    /// Add an edge in both directions with the same cost.
    #[must_use]
    pub fn undirected(self, a: &'static str, b: &'static str, cost: u64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// Mark a node as a goal.
    #[must_use]
    pub fn goal(mut self, node: &'static str) -> Self {
        self.goals.insert(node);
        self
    }

    /// Number of edges in the table.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl SearchSpace for TableGraph {
    type Node = &'static str;
    type Cost = u64;
    type Label = String;

    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "table"
    }

    fn expand(&self, node: &&'static str) -> Vec<(&'static str, u64, String)> {
        self.adjacency
            .get(node)
            .map(|out| {
                out.iter()
                    .map(|&(to, cost)| (to, cost, format!("{node}->{to}")))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_goal(&self, node: &&'static str) -> bool {
        self.goals.contains(node)
    }
}
