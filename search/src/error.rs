//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Not finding a path is
//! not an error: it is `None` from [`crate::dijkstra`], or a
//! [`crate::Termination`] other than `GoalReached` from a bounded search.

/// Typed failure for pre-flight search validation.
///
/// Returned before the first frontier pop. No search state exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot run a meaningful search.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
