//! Shared instances and fixture rendering for the lock tests.
//!
//! The `search_fixture` binary prints [`fixture_lines`]; the cross-process
//! test compares that output with the in-process rendering.

use lodestar_harness::policy::{Algorithm, RunConfig};
use lodestar_harness::runner::{run_puzzle, RunError};
use lodestar_harness::transcript::{self_play, Decider};
use lodestar_harness::worlds::eight_puzzle::{PuzzleHeuristic, PuzzleMove, PuzzleState};
use lodestar_harness::worlds::tictactoe::{Board, BoardError, MoveOrder};
use lodestar_kernel::proof::canon::CanonError;

use PuzzleMove::{Down, Left, Right, Up};

/// A named 8-puzzle instance with its known optimal solution length.
#[derive(Debug, Clone, Copy)]
pub struct Instance {
    pub name: &'static str,
    pub state: PuzzleState,
    pub optimal_len: usize,
}

/// Goal plus four scrambles of increasing difficulty.
#[must_use]
pub fn instances() -> Vec<Instance> {
    vec![
        Instance {
            name: "goal",
            state: PuzzleState::goal(),
            optimal_len: 0,
        },
        Instance {
            name: "three",
            state: PuzzleState::scrambled(&[Up, Left, Down]),
            optimal_len: 3,
        },
        Instance {
            name: "six",
            state: PuzzleState::scrambled(&[Up, Left, Down, Right, Right, Down]),
            optimal_len: 6,
        },
        Instance {
            name: "ten",
            state: PuzzleState::scrambled(&[
                Up, Right, Down, Left, Left, Up, Right, Right, Down, Left,
            ]),
            optimal_len: 10,
        },
        Instance {
            name: "sixteen",
            state: PuzzleState::scrambled(&[
                Down, Left, Up, Right, Right, Up, Left, Left, Down, Down, Right, Right, Up,
                Left, Up, Right,
            ]),
            optimal_len: 16,
        },
    ]
}

/// Instances small enough for IDS and DLS sweeps.
#[must_use]
pub fn shallow_instances() -> Vec<Instance> {
    instances()
        .into_iter()
        .filter(|i| i.optimal_len <= 10)
        .collect()
}

/// Failure while rendering fixture output.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Render the deterministic `key=value` fixture output.
///
/// # Errors
///
/// Returns [`FixtureError`] if any run fails.
pub fn fixture_lines() -> Result<Vec<String>, FixtureError> {
    let mut lines = Vec::new();

    for instance in instances() {
        for (algorithm, heuristic) in [
            (Algorithm::Bfs, PuzzleHeuristic::Zero),
            (Algorithm::AStar, PuzzleHeuristic::Manhattan),
            (Algorithm::AStar, PuzzleHeuristic::MisplacedTiles),
        ] {
            let config = RunConfig::new(algorithm).with_heuristic(heuristic);
            let report = run_puzzle(&instance.state, &config)?;
            let key = if algorithm.is_informed() {
                format!("{}.{}.{}", instance.name, algorithm.as_str(), heuristic.as_str())
            } else {
                format!("{}.{}", instance.name, algorithm.as_str())
            };
            lines.push(format!("{key}.path_len={:?}", report.outcome.path_len()));
            lines.push(format!("{key}.expanded={}", report.outcome.stats.expanded));
            lines.push(format!("{key}.digest={}", report.digest));
        }
    }

    for order in MoveOrder::ALL {
        let transcript = self_play(&Board::empty(), order, Decider::AlphaBeta)?;
        lines.push(format!(
            "self_play.{}.final={}",
            order.as_str(),
            transcript.final_board
        ));
        lines.push(format!(
            "self_play.{}.digest={}",
            order.as_str(),
            transcript.digest()?
        ));
    }

    Ok(lines)
}
