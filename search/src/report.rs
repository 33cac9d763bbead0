//! Search outcome, counters, and their canonical JSON form.
//!
//! Every algorithm returns a [`SearchOutcome`]. "No solution" is a `None`
//! path with a non-goal [`TerminationReason`]; it is never an error.

use lodestar_kernel::proof::canon::{canonical_json_bytes, CanonError};

use crate::path::SearchPath;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The frontier head satisfied the goal test.
    GoalReached,
    /// The frontier emptied with no goal and no depth cutoff.
    FrontierExhausted,
    /// DLS emptied its stack but left nodes unexpanded at the depth limit.
    DepthLimitReached,
    /// `max_expansions` was hit.
    ExpansionBudgetExceeded,
    /// IDS passed `max_depth` without finding a goal.
    DepthBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimitReached => "depth_limit_reached",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
        }
    }
}

/// Diagnostic counters for one search invocation.
///
/// Counting never influences control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Goal-test calls.
    pub evaluated: u64,
    /// Successor-generation calls.
    pub expanded: u64,
    /// Successors produced by all expansions.
    pub generated: u64,
    /// Successors or popped nodes skipped because their id was closed.
    pub duplicates_suppressed: u64,
    /// Largest open-set size observed.
    pub frontier_high_water: u64,
    /// Depth-limited passes run (IDS); 1 for single-pass algorithms.
    pub iterations: u64,
}

impl SearchStats {
    /// Fold the counters of a later pass into this one.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.evaluated += other.evaluated;
        self.expanded += other.expanded;
        self.generated += other.generated;
        self.duplicates_suppressed += other.duplicates_suppressed;
        self.frontier_high_water = self.frontier_high_water.max(other.frontier_high_water);
        self.iterations += other.iterations;
    }
}

/// Result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    /// The solution path, or `None` for "no solution".
    pub path: Option<SearchPath<S, A>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<S, A> SearchOutcome<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Number of actions on the solution path.
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(SearchPath::len)
    }

    /// Summary as a `serde_json::Value` (termination, counters, path length).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "path_len": self.path_len(),
            "stats": stats_to_json(&self.stats),
            "termination_reason": self.termination.as_str(),
        })
    }

    /// Serialize the summary to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }
}

/// Render counters with sorted, stable field names.
#[must_use]
pub fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "duplicates_suppressed": stats.duplicates_suppressed,
        "evaluated": stats.evaluated,
        "expanded": stats.expanded,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "iterations": stats.iterations,
    })
}
