//! `TicTacToe`: the 3x3 game as an adversarial search world.
//!
//! Cells are indexed row-major:
//!
//! ```text
//! 0|1|2
//! -+-+-
//! 3|4|5
//! -+-+-
//! 6|7|8
//! ```
//!
//! `Player::First` plays X and `Player::Second` plays O. Utility rewards
//! fast wins: a win scores `empty_cells + 1` for the winner and the negation
//! for the loser; a draw scores 0.

use std::fmt;

use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::adversarial::{Game, Player};

/// The eight winning lines.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Malformed board input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have 9 cells, got {len}")]
    WrongLength { len: usize },
    #[error("unknown mark {mark:?} at cell {index} (expected '.', 'X' or 'O')")]
    UnknownMark { index: usize, mark: char },
    /// X moves first, so X must have as many marks as O or one more.
    #[error("impossible mark counts: {x} X, {o} O")]
    ImpossibleCounts { x: usize, o: usize },
}

/// Mark character for a player.
#[must_use]
pub fn mark(player: Player) -> char {
    match player {
        Player::First => 'X',
        Player::Second => 'O',
    }
}

/// A tic-tac-toe position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a 9-character row-major string of `.`, `X` and `O`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] or [`BoardError::UnknownMark`].
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardError::WrongLength { len: chars.len() });
        }
        let mut cells = [None; 9];
        for (index, (&mark, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = match mark {
                '.' => None,
                'X' => Some(Player::First),
                'O' => Some(Player::Second),
                _ => return Err(BoardError::UnknownMark { index, mark }),
            };
        }
        Ok(Self { cells })
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_cells() == 0
    }

    /// The player owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = self.cells[a]?;
            (self.cells[b] == Some(owner) && self.cells[c] == Some(owner)).then_some(owner)
        })
    }

    /// Whose turn it is, inferred from the mark counts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ImpossibleCounts`] if X does not have as many
    /// marks as O or exactly one more.
    pub fn to_move(&self) -> Result<Player, BoardError> {
        let x = self.count(Player::First);
        let o = self.count(Player::Second);
        if x == o {
            Ok(Player::First)
        } else if x == o + 1 {
            Ok(Player::Second)
        } else {
            Err(BoardError::ImpossibleCounts { x, o })
        }
    }

    fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    /// The board with `player`'s mark on `index`. Occupied or out-of-range
    /// cells leave the board unchanged.
    #[must_use]
    pub fn place(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            if cell.is_none() {
                *cell = Some(player);
            }
        }
        next
    }

    /// Domain-separated content hash of the compact rendering.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::BoardState, self.to_string().as_bytes())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = cell.map_or('.', mark);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Order in which empty cells are tried. Affects pruning only, never the
/// minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    Linear,
    CenterFirst,
    /// Center, then corners, then edges. Prunes the most.
    #[default]
    CenterCornersEdges,
    /// Edges, then corners, then center. Prunes the least.
    EdgesFirst,
}

impl MoveOrder {
    pub const ALL: [MoveOrder; 4] = [
        Self::Linear,
        Self::CenterFirst,
        Self::CenterCornersEdges,
        Self::EdgesFirst,
    ];

    #[must_use]
    pub fn cells(self) -> [usize; 9] {
        match self {
            Self::Linear => [0, 1, 2, 3, 4, 5, 6, 7, 8],
            Self::CenterFirst => [4, 0, 1, 2, 3, 5, 6, 7, 8],
            Self::CenterCornersEdges => [4, 0, 2, 6, 8, 1, 3, 5, 7],
            Self::EdgesFirst => [1, 3, 5, 7, 0, 2, 6, 8, 4],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::CenterFirst => "center_first",
            Self::CenterCornersEdges => "center_corners_edges",
            Self::EdgesFirst => "edges_first",
        }
    }
}

/// Tic-tac-toe under a fixed move ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe {
    pub order: MoveOrder,
}

impl TicTacToe {
    #[must_use]
    pub fn new(order: MoveOrder) -> Self {
        Self { order }
    }
}

impl Game for TicTacToe {
    type Position = Board;
    type Move = usize;

    fn is_terminal(&self, board: &Board) -> bool {
        board.winner().is_some() || board.is_full()
    }

    fn utility(&self, board: &Board, player: Player) -> i32 {
        match board.winner() {
            None => 0,
            Some(winner) => {
                // At most 9 empty cells.
                let score = i32::try_from(board.empty_cells()).unwrap_or(9) + 1;
                if winner == player {
                    score
                } else {
                    -score
                }
            }
        }
    }

    fn legal_moves(&self, board: &Board) -> Vec<usize> {
        self.order
            .cells()
            .into_iter()
            .filter(|&i| board.cell(i).is_none())
            .collect()
    }

    fn play(&self, board: &Board, mv: usize, player: Player) -> Board {
        board.place(mv, player)
    }
}
