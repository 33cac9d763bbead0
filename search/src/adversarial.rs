//! Adversarial search: minimax and alpha-beta over a two-player zero-sum game.
//!
//! Scores are always from the point of view of `cpu_player`. A node where it
//! is `cpu_player`'s turn maximizes; every other node minimizes. Positions
//! with no legal moves are scored like terminal positions.

use std::fmt::Debug;

use log::debug;

/// One side of a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    /// Moves first from the initial position (X in tic-tac-toe).
    First,
    /// Moves second (O in tic-tac-toe).
    Second,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Two-player zero-sum perfect-information game.
pub trait Game {
    type Position: Clone;
    type Move: Copy + Eq + Debug;

    fn is_terminal(&self, position: &Self::Position) -> bool;

    /// Score of a finished `position` for `player`. Zero-sum: the opponent's
    /// utility is the negation.
    fn utility(&self, position: &Self::Position, player: Player) -> i32;

    /// Legal moves in the game's fixed expansion order.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Self::Move>;

    /// Apply `mv` for `player`, producing a new position.
    fn play(&self, position: &Self::Position, mv: Self::Move, player: Player) -> Self::Position;
}

/// Node counters for one game-tree search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSearchStats {
    /// Terminal tests performed.
    pub evaluated: u64,
    /// Nodes whose legal moves were generated.
    pub expanded: u64,
}

/// Decision at the root of a game-tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSearchResult<M> {
    /// `None` when the root is terminal or has no legal moves.
    pub best_move: Option<M>,
    pub score: i32,
    pub stats: GameSearchStats,
}

/// Full-width minimax.
///
/// Among equally scored moves the first in `legal_moves` order wins.
pub fn minimax<G: Game>(
    game: &G,
    position: &G::Position,
    cpu_player: Player,
    to_move: Player,
) -> GameSearchResult<G::Move> {
    let mut stats = GameSearchStats::default();
    let (best_move, score) = minimax_node(game, position, cpu_player, to_move, &mut stats);
    debug!(
        "minimax: move={best_move:?} score={score} evaluated={} expanded={}",
        stats.evaluated, stats.expanded
    );
    GameSearchResult {
        best_move,
        score,
        stats,
    }
}

fn minimax_node<G: Game>(
    game: &G,
    position: &G::Position,
    cpu_player: Player,
    to_move: Player,
    stats: &mut GameSearchStats,
) -> (Option<G::Move>, i32) {
    stats.evaluated += 1;
    if game.is_terminal(position) {
        return (None, game.utility(position, cpu_player));
    }
    let moves = game.legal_moves(position);
    if moves.is_empty() {
        return (None, game.utility(position, cpu_player));
    }
    stats.expanded += 1;

    let maximizing = to_move == cpu_player;
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        let child = game.play(position, mv, to_move);
        let (_, score) = minimax_node(game, &child, cpu_player, to_move.opponent(), stats);
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better || best_move.is_none() {
            best_move = Some(mv);
            best_score = score;
        }
    }
    (best_move, best_score)
}

/// Minimax with alpha-beta pruning.
///
/// Remaining siblings are skipped once alpha exceeds beta. Returns the same
/// move and score as [`minimax`] at the root while expanding no more nodes.
pub fn alpha_beta<G: Game>(
    game: &G,
    position: &G::Position,
    cpu_player: Player,
    to_move: Player,
) -> GameSearchResult<G::Move> {
    let mut stats = GameSearchStats::default();
    let (best_move, score) = alpha_beta_node(
        game,
        position,
        cpu_player,
        to_move,
        i32::MIN,
        i32::MAX,
        &mut stats,
    );
    debug!(
        "alpha_beta: move={best_move:?} score={score} evaluated={} expanded={}",
        stats.evaluated, stats.expanded
    );
    GameSearchResult {
        best_move,
        score,
        stats,
    }
}

fn alpha_beta_node<G: Game>(
    game: &G,
    position: &G::Position,
    cpu_player: Player,
    to_move: Player,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut GameSearchStats,
) -> (Option<G::Move>, i32) {
    stats.evaluated += 1;
    if game.is_terminal(position) {
        return (None, game.utility(position, cpu_player));
    }
    let moves = game.legal_moves(position);
    if moves.is_empty() {
        return (None, game.utility(position, cpu_player));
    }
    stats.expanded += 1;

    let maximizing = to_move == cpu_player;
    let mut best_move = None;
    let mut best_score = if maximizing { alpha } else { beta };
    for mv in moves {
        let child = game.play(position, mv, to_move);
        let (_, score) = alpha_beta_node(
            game,
            &child,
            cpu_player,
            to_move.opponent(),
            alpha,
            beta,
            stats,
        );
        if maximizing {
            if score > alpha || best_move.is_none() {
                best_move = Some(mv);
                best_score = score;
                alpha = alpha.max(score);
            }
        } else if score < beta || best_move.is_none() {
            best_move = Some(mv);
            best_score = score;
            beta = beta.min(score);
        }
        if alpha > beta {
            break;
        }
    }
    (best_move, best_score)
}
