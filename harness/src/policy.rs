//! Run configuration: which algorithm, which heuristic, which budgets.
//!
//! A [`RunConfig`] is rendered to a canonical JSON [`ConfigSnapshot`] that
//! is embedded in every run report, so the report digest commits to the
//! configuration that produced it.

use lodestar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::policy::{SearchPolicy, TieBreak};

use crate::worlds::eight_puzzle::PuzzleHeuristic;

/// Domain prefix for config snapshot hashing.
pub const DOMAIN_RUN_CONFIG: HashDomain = HashDomain::RunConfig;

/// Graph-search algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dls { depth_limit: u32 },
    Ids,
    AStar,
}

impl Algorithm {
    /// Stable name used in reports and fixture output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dls { .. } => "dls",
            Self::Ids => "ids",
            Self::AStar => "astar",
        }
    }

    /// Whether the heuristic influences this algorithm.
    #[must_use]
    pub fn is_informed(self) -> bool {
        matches!(self, Self::AStar)
    }
}

/// Configuration for one 8-puzzle run.
///
/// Budget fields left at `None` mean unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    /// Ignored unless `algorithm` is [`Algorithm::AStar`].
    pub heuristic: PuzzleHeuristic,
    pub max_expansions: Option<u64>,
    /// IDS depth cap.
    pub max_depth: Option<u32>,
    pub tie_break: TieBreak,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            heuristic: PuzzleHeuristic::Manhattan,
            max_expansions: None,
            max_depth: None,
            tie_break: TieBreak::ShallowFirst,
        }
    }
}

/// Canonical bytes of a [`RunConfig`] and their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_RUN_CONFIG, bytes)`.
    pub digest: ContentHash,
}

impl RunConfig {
    /// Default budgets and heuristic with the given algorithm.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: PuzzleHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// The search-layer policy for this run. Actions cost 1.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
            max_depth: self.max_depth,
            step_cost: 1,
            tie_break: self.tie_break,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let depth_limit = match self.algorithm {
            Algorithm::Dls { depth_limit } => Some(depth_limit),
            _ => None,
        };
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "budgets": {
                "max_depth": self.max_depth,
                "max_expansions": self.max_expansions,
            },
            "depth_limit": depth_limit,
            "heuristic": self.algorithm.is_informed().then(|| self.heuristic.as_str()),
            "schema_version": "run_config.v1",
            "step_cost": 1,
            "tie_break": self.tie_break.as_str(),
        })
    }

    /// Render the canonical snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical JSON serialization fails.
    pub fn snapshot(&self) -> Result<ConfigSnapshot, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        let digest = canonical_hash(DOMAIN_RUN_CONFIG, &bytes);
        Ok(ConfigSnapshot { bytes, digest })
    }
}
