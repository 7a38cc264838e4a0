//! Search policy types.

use crate::error::SearchError;

/// Budget configuration for a bounded search.
///
/// The default policy is unbounded, which makes [`crate::search::search`]
/// behave exactly like [`crate::dijkstra_from`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (settled nodes). `None` is unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// An unbounded policy.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// A policy that stops after `max` expansions.
    #[must_use]
    pub fn with_max_expansions(max: u64) -> Self {
        Self {
            max_expansions: Some(max),
        }
    }

    /// Validate that this policy can run a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero:
    /// such a search could only ever answer for the start node.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be positive when set".into(),
            });
        }
        Ok(())
    }

    /// Render for run reports. `null` means unbounded.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
        })
    }
}
