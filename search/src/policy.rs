//! Search policy types.

use crate::error::SearchError;

/// Budgets, step cost and frontier tie-break shared by all graph searches.
///
/// The default is unbounded: BFS and A\* run until the frontier empties and
/// IDS deepens forever on an unreachable goal. Callers that need bounded
/// behaviour set `max_expansions` and/or `max_depth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on successor-generation calls (summed over IDS iterations).
    pub max_expansions: Option<u64>,
    /// Largest depth limit IDS will try before giving up.
    pub max_depth: Option<u32>,
    /// Cost of every action. A\* only; BFS/DLS/IDS count actions.
    pub step_cost: i64,
    /// How A\* orders nodes with equal estimated total cost.
    pub tie_break: TieBreak,
}

impl SearchPolicy {
    /// Unbounded policy with the given expansion cap.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    /// Reject values the algorithms cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `step_cost` is not positive
    /// or `max_depth` is zero (IDS starts at depth limit 1).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.step_cost < 1 {
            return Err(SearchError::InvalidPolicy {
                detail: format!("step_cost must be at least 1, got {}", self.step_cost),
            });
        }
        if self.max_depth == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Whether `expanded` successor-generation calls exhaust the budget.
    #[must_use]
    pub fn expansion_budget_spent(&self, expanded: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expanded >= cap)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_depth: None,
            step_cost: 1,
            tie_break: TieBreak::ShallowFirst,
        }
    }
}

/// Ordering among A\* frontier nodes with equal `f_cost`.
///
/// Both variants fall back to insertion order (FIFO) after path cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Lower path cost first.
    #[default]
    ShallowFirst,
    /// Higher path cost first.
    DeepFirst,
}

impl TieBreak {
    /// Stable lowercase name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShallowFirst => "shallow_first",
            Self::DeepFirst => "deep_first",
        }
    }
}
