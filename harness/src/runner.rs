//! Harness runner: runs a configured search and packages an auditable report.
//!
//! # Pipeline
//!
//! ```text
//! is_solvable() → RunConfig::snapshot()
//!   → run_search() → verify_path()
//!   → report JSON → canonical bytes → RunReport digest
//! ```
//!
//! The runner holds no search logic of its own; it selects an algorithm from
//! `lodestar_search` and replays whatever path comes back before reporting.

use log::info;

use lodestar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::contract::StateSpace;
use lodestar_search::error::{PathError, SearchError};
use lodestar_search::informed::astar;
use lodestar_search::path::verify_path;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::report::SearchOutcome;
use lodestar_search::uninformed::{breadth_first, depth_limited, iterative_deepening};

use crate::policy::{Algorithm, ConfigSnapshot, RunConfig};
use crate::worlds::eight_puzzle::{EightPuzzle, Grid, PuzzleError, PuzzleMove, PuzzleState};

/// Domain prefix for search summary hashing.
pub const DOMAIN_SEARCH_REPORT: HashDomain = HashDomain::SearchReport;
/// Domain prefix for the run report digest.
pub const DOMAIN_RUN_REPORT: HashDomain = HashDomain::RunReport;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] PuzzleError),
    /// The initial layout's inversion parity differs from the goal's.
    #[error("puzzle {layout} cannot reach the goal")]
    Unsolvable { layout: String },
    #[error("search rejected the run: {0}")]
    Search(#[from] SearchError),
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
    /// The returned path did not replay. Indicates a search bug.
    #[error("returned path failed verification: {0}")]
    Verify(#[from] PathError),
}

/// Result of one harness run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: SearchOutcome<PuzzleState, PuzzleMove>,
    pub config: ConfigSnapshot,
    /// Canonical JSON bytes of the report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_RUN_REPORT, bytes)`.
    pub digest: ContentHash,
}

impl RunReport {
    /// Action ids along the solution path, empty for "no solution".
    #[must_use]
    pub fn action_ids(&self) -> Vec<u8> {
        path_action_ids(&self.outcome)
    }
}

fn path_action_ids(outcome: &SearchOutcome<PuzzleState, PuzzleMove>) -> Vec<u8> {
    outcome
        .path
        .as_ref()
        .map(|p| p.actions.iter().map(|a| a.id()).collect())
        .unwrap_or_default()
}

/// Dispatch `algorithm` over any state space.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails validation.
pub fn run_search<W: StateSpace>(
    space: &W,
    initial: &W::State,
    algorithm: Algorithm,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State, W::Action>, SearchError> {
    match algorithm {
        Algorithm::Bfs => breadth_first(space, initial, policy),
        Algorithm::Dls { depth_limit } => depth_limited(space, initial, depth_limit, policy),
        Algorithm::Ids => iterative_deepening(space, initial, policy),
        Algorithm::AStar => astar(space, initial, policy),
    }
}

/// Solve an 8-puzzle instance under `config` and build its report.
///
/// Unsolvable layouts are rejected before searching. A returned path is
/// replayed against the puzzle before the report is built.
///
/// # Errors
///
/// Returns [`RunError`] if the layout is unsolvable, the policy is invalid,
/// the path fails replay, or canonical serialization fails.
pub fn run_puzzle(initial: &PuzzleState, config: &RunConfig) -> Result<RunReport, RunError> {
    if !initial.is_solvable() {
        return Err(RunError::Unsolvable {
            layout: initial.to_compact_string(),
        });
    }

    let snapshot = config.snapshot()?;
    let space = EightPuzzle::new(config.heuristic);
    let outcome = run_search(&space, initial, config.algorithm, &config.search_policy())?;

    if let Some(path) = &outcome.path {
        verify_path(&space, initial, path)?;
    }

    let summary_bytes = outcome.to_canonical_json_bytes()?;
    let search_digest = canonical_hash(DOMAIN_SEARCH_REPORT, &summary_bytes);
    let report_value = serde_json::json!({
        "action_ids": path_action_ids(&outcome),
        "config": config.to_json_value(),
        "config_digest": snapshot.digest.as_str(),
        "initial": initial.to_compact_string(),
        "schema_version": "run_report.v1",
        "search": outcome.to_json_value(),
        "search_digest": search_digest.as_str(),
    });
    let bytes = canonical_json_bytes(&report_value)?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);

    info!(
        "{} on {}: {} path_len={:?} expanded={} digest={}",
        config.algorithm.as_str(),
        initial.to_compact_string(),
        outcome.termination.as_str(),
        outcome.path_len(),
        outcome.stats.expanded,
        digest,
    );

    Ok(RunReport {
        outcome,
        config: snapshot,
        bytes,
        digest,
    })
}

/// Validate a raw grid, then [`run_puzzle`].
///
/// # Errors
///
/// Returns [`RunError::InvalidPuzzle`] for a malformed grid, otherwise as
/// [`run_puzzle`].
pub fn run_grid(grid: Grid, config: &RunConfig) -> Result<RunReport, RunError> {
    let initial = PuzzleState::new(grid)?;
    run_puzzle(&initial, config)
}
