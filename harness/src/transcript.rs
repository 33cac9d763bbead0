//! Self-play: two game-tree searchers alternate moves on a tic-tac-toe board.
//!
//! Each ply asks the mover's searcher for a decision with `cpu_player` set to
//! the mover. The resulting [`GameTranscript`] renders to canonical JSON and
//! hashes under its own domain, so repeated games can be compared byte for
//! byte.

use log::{debug, info};

use lodestar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::adversarial::{alpha_beta, minimax, Game, GameSearchStats, Player};

use crate::worlds::tictactoe::{mark, Board, BoardError, MoveOrder, TicTacToe};

/// Domain prefix for transcript hashing.
pub const DOMAIN_GAME_TRANSCRIPT: HashDomain = HashDomain::GameTranscript;

/// Game-tree search used to pick each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decider {
    Minimax,
    #[default]
    AlphaBeta,
}

impl Decider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::AlphaBeta => "alpha_beta",
        }
    }
}

/// One move of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply {
    pub player: Player,
    pub cell: usize,
    /// Backed-up score from the mover's point of view.
    pub score: i32,
    pub stats: GameSearchStats,
}

/// Full record of a self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTranscript {
    pub start: Board,
    pub order: MoveOrder,
    pub decider: Decider,
    pub plies: Vec<Ply>,
    pub final_board: Board,
    pub winner: Option<Player>,
}

impl GameTranscript {
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Node counts summed over all plies.
    #[must_use]
    pub fn total_stats(&self) -> GameSearchStats {
        self.plies
            .iter()
            .fold(GameSearchStats::default(), |acc, ply| GameSearchStats {
                evaluated: acc.evaluated + ply.stats.evaluated,
                expanded: acc.expanded + ply.stats.expanded,
            })
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let plies: Vec<serde_json::Value> = self
            .plies
            .iter()
            .map(|ply| {
                serde_json::json!({
                    "cell": ply.cell,
                    "evaluated": ply.stats.evaluated,
                    "expanded": ply.stats.expanded,
                    "player": mark(ply.player).to_string(),
                    "score": ply.score,
                })
            })
            .collect();
        serde_json::json!({
            "decider": self.decider.as_str(),
            "final_board": self.final_board.to_string(),
            "move_order": self.order.as_str(),
            "plies": plies,
            "schema_version": "game_transcript.v1",
            "start": self.start.to_string(),
            "winner": self.winner.map(|p| mark(p).to_string()),
        })
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical JSON serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// `canonical_hash(DOMAIN_GAME_TRANSCRIPT, canonical bytes)`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical JSON serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_GAME_TRANSCRIPT, &bytes))
    }
}

/// Play `start` out to the end with both sides using `decider`.
///
/// # Errors
///
/// Returns [`BoardError::ImpossibleCounts`] if the side to move cannot be
/// inferred from `start`.
pub fn self_play(
    start: &Board,
    order: MoveOrder,
    decider: Decider,
) -> Result<GameTranscript, BoardError> {
    let game = TicTacToe::new(order);
    let mut to_move = start.to_move()?;
    let mut board = *start;
    let mut plies = Vec::new();

    while !game.is_terminal(&board) {
        let decision = match decider {
            Decider::Minimax => minimax(&game, &board, to_move, to_move),
            Decider::AlphaBeta => alpha_beta(&game, &board, to_move, to_move),
        };
        let Some(cell) = decision.best_move else {
            break;
        };
        debug!(
            "self_play: {} takes {cell} (score {}, expanded {})",
            mark(to_move),
            decision.score,
            decision.stats.expanded
        );
        plies.push(Ply {
            player: to_move,
            cell,
            score: decision.score,
            stats: decision.stats,
        });
        board = game.play(&board, cell, to_move);
        to_move = to_move.opponent();
    }

    let winner = board.winner();
    info!(
        "self_play {} / {}: {start} -> {board}, winner={}",
        decider.as_str(),
        order.as_str(),
        winner.map_or('-', mark)
    );

    Ok(GameTranscript {
        start: *start,
        order,
        decider,
        plies,
        final_board: board,
        winner,
    })
}
