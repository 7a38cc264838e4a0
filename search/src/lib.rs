//! Wayfind Search: lazy-relaxation shortest-path search over implicit graphs.
//!
//! The graph is never materialized. The caller supplies a start node, an
//! expansion function producing `(neighbor, edge_cost, label)` triples, and a
//! goal predicate. The engine keeps a binary-heap frontier, a settled set and
//! one predecessor record per reached node, all owned by a single call.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_geometry     wayfind_search  ←  wayfind_harness
//! (value types)        (engine)           (worlds, runner, reports)
//! ```
//!
//! # Key items
//!
//! - [`dijkstra`] / [`dijkstra_from`] -- unbounded search, `Option<FoundPath>`
//! - [`search::search`] -- policy-bounded search returning a [`SearchRun`]
//! - [`Cost`] -- additive, ordered cost with a zero
//! - [`SearchSpace`] -- trait for worlds that own their expansion logic
//! - [`FoundPath`] / [`PathStep`] -- reconstructed start→goal path

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod path;
pub mod policy;
pub mod search;
pub mod stats;

pub use contract::SearchSpace;
pub use cost::Cost;
pub use error::SearchError;
pub use path::{FoundPath, PathStep};
pub use policy::SearchPolicy;
pub use search::{dijkstra, dijkstra_from, search_space, SearchRun};
pub use stats::{SearchStats, Termination};
