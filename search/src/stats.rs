//! Run counters and termination reasons.

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A popped node satisfied the goal predicate.
    GoalReached,
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// The policy's expansion cap was hit before a goal was popped.
    ExpansionBudgetExceeded,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes settled and passed to the expansion function.
    pub expansions: u64,
    /// Frontier pops discarded because the node was already settled.
    pub stale_pops: u64,
    /// Predecessor records written (first discovery or improvement).
    pub relaxations: u64,
    /// Frontier entries pushed, the start entry included.
    pub frontier_pushes: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    /// Convert to a `serde_json::Value` for report serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "frontier_pushes": self.frontier_pushes,
            "relaxations": self.relaxations,
            "stale_pops": self.stale_pops,
        })
    }
}
