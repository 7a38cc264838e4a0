//! Harness runner: runs a world through the search engine and produces a
//! run report.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → search_space() → report JSON
//!   → canonical_json_bytes() → canonical_hash(RunReport)
//! ```
//!
//! Nodes, labels and costs are rendered with `Display`, so report bytes
//! depend only on what the world produces, never on hash-map iteration order
//! or float formatting in the JSON writer.

use std::fmt::Display;

use wayfind_search::{search_space, FoundPath, SearchError, SearchPolicy, SearchSpace};
use wayfind_search::{SearchStats, Termination};

use crate::canon::{canonical_json_bytes, CanonError};
use crate::digest::{canonical_hash, ContentHash, HashDomain};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The search policy failed validation.
    Policy(SearchError),
    /// Canonical JSON serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Policy(e) => write!(f, "search policy rejected: {e}"),
            Self::Canon(e) => write!(f, "report serialization failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Policy(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Policy(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// The outcome of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// `SearchSpace::space_id()` of the world that was searched.
    pub space_id: String,
    /// Why the search stopped.
    pub termination: Termination,
    /// Search counters.
    pub stats: SearchStats,
    /// Rendered total cost, if a goal was reached.
    pub cost: Option<String>,
    /// Canonical JSON bytes of the full report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(RunReport, bytes)`.
    pub digest: ContentHash,
    /// `canonical_hash(SearchPolicy, canonical policy JSON)`.
    pub policy_digest: ContentHash,
}

impl RunReport {
    /// Parse the report bytes back into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the bytes are not valid JSON, which
    /// only happens if they were modified after the run.
    pub fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.bytes)
    }
}

/// Run `space` from `start` under `policy` and build the report.
///
/// # Errors
///
/// Returns [`RunError::Policy`] if the policy is invalid (nothing is
/// searched), or [`RunError::Canon`] if the report cannot be canonicalized.
pub fn run_world<S>(space: &S, start: S::Node, policy: &SearchPolicy) -> Result<RunReport, RunError>
where
    S: SearchSpace + ?Sized,
    S::Node: Display,
    S::Cost: Display,
    S::Label: Display,
{
    let run = search_space(space, start, policy)?;

    let policy_bytes = canonical_json_bytes(&policy.to_json_value())?;
    let policy_digest = canonical_hash(HashDomain::SearchPolicy, &policy_bytes);

    let report = serde_json::json!({
        "path": run.path.as_ref().map_or(serde_json::Value::Null, path_to_json),
        "policy_digest": policy_digest.as_str(),
        "space_id": space.space_id(),
        "stats": run.stats.to_json_value(),
        "termination": run.termination.as_str(),
    });
    let bytes = canonical_json_bytes(&report)?;
    let digest = canonical_hash(HashDomain::RunReport, &bytes);

    tracing::info!(
        space_id = space.space_id(),
        termination = run.termination.as_str(),
        expansions = run.stats.expansions,
        digest = digest.as_str(),
        "run complete"
    );

    Ok(RunReport {
        space_id: space.space_id().to_string(),
        termination: run.termination,
        stats: run.stats,
        cost: run.path.as_ref().map(|p| p.cost.to_string()),
        bytes,
        digest,
        policy_digest,
    })
}

fn path_to_json<N: Display, C: Display, L: Display>(path: &FoundPath<N, C, L>) -> serde_json::Value {
    serde_json::json!({
        "cost": path.cost.to_string(),
        "nodes": path.nodes.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "steps": path.steps.iter().map(|s| serde_json::json!({
            "edge_cost": s.edge_cost.to_string(),
            "from": s.from.to_string(),
            "label": s.label.to_string(),
            "to": s.to.to_string(),
        })).collect::<Vec<_>>(),
    })
}
