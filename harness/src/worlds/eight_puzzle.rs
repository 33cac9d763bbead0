//! `EightPuzzle`: the 3x3 sliding-tile puzzle as a search world.
//!
//! A state is a 3x3 grid holding each value `0..=8` exactly once, `0` being
//! the blank. Actions move the blank one cell; their integer ids are stable
//! and appear in run reports:
//!
//! | id | action                                   |
//! |----|------------------------------------------|
//! | 1  | blank up (tile above slides down)        |
//! | 2  | blank down (tile below slides up)        |
//! | 3  | blank left (tile to the left slides right) |
//! | 4  | blank right (tile to the right slides left) |
//!
//! Successors are generated in id order. Closed-set identity is a
//! domain-separated content hash of the row-major tile bytes.

use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::contract::{StateSpace, Successor};

/// Row-major 3x3 tile layout.
pub type Grid = [[u8; 3]; 3];

/// The goal layout: tiles clockwise around a central blank.
pub const GOAL_GRID: Grid = [[1, 2, 3], [8, 0, 4], [7, 6, 5]];

/// Malformed puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// The grid does not hold each of `0..=8` exactly once.
    #[error("grid must contain each of 0..=8 exactly once, got {grid:?}")]
    WrongTileSet { grid: Grid },
}

/// A blank move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PuzzleMove {
    Up = 1,
    Down = 2,
    Left = 3,
    Right = 4,
}

impl PuzzleMove {
    /// All moves in successor order.
    pub const ALL: [PuzzleMove; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Stable integer action id.
    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Inverse of [`PuzzleMove::id`].
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// `(row, col)` offset applied to the blank.
    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// A validated 8-puzzle layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    grid: Grid,
}

impl PuzzleState {
    /// Validate and wrap a grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::WrongTileSet`] unless every value `0..=8`
    /// appears exactly once.
    pub fn new(grid: Grid) -> Result<Self, PuzzleError> {
        let mut seen = [false; 9];
        for &tile in grid.iter().flatten() {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::WrongTileSet { grid }),
            }
        }
        Ok(Self { grid })
    }

    #[must_use]
    pub fn goal() -> Self {
        Self { grid: GOAL_GRID }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        position_of(&self.grid, 0)
    }

    /// The layout after moving the blank, or `None` if it would leave the grid.
    #[must_use]
    pub fn apply(&self, mv: PuzzleMove) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = mv.delta();
        let to_row = row.checked_add_signed(dr).filter(|r| *r < 3)?;
        let to_col = col.checked_add_signed(dc).filter(|c| *c < 3)?;

        let mut grid = self.grid;
        grid[row][col] = grid[to_row][to_col];
        grid[to_row][to_col] = 0;
        Some(Self { grid })
    }

    /// Walk the blank from the goal along `moves`, skipping any move that
    /// would leave the grid. The result is always solvable.
    #[must_use]
    pub fn scrambled(moves: &[PuzzleMove]) -> Self {
        moves
            .iter()
            .fold(Self::goal(), |state, &mv| state.apply(mv).unwrap_or(state))
    }

    /// Whether the goal is reachable from this layout.
    ///
    /// Sliding moves preserve the parity of the inversion count of the
    /// row-major tile sequence (blank excluded), so a layout is solvable
    /// exactly when its parity matches the goal's.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        inversions(&self.grid) % 2 == inversions(&GOAL_GRID) % 2
    }

    /// Sum over tiles of the grid distance to their goal cell.
    #[must_use]
    pub fn manhattan(&self) -> i64 {
        let mut total = 0;
        for tile in 1..=8u8 {
            let (r, c) = position_of(&self.grid, tile);
            let (gr, gc) = position_of(&GOAL_GRID, tile);
            total += r.abs_diff(gr) + c.abs_diff(gc);
        }
        total as i64
    }

    /// Number of tiles (blank excluded) not on their goal cell.
    #[must_use]
    pub fn misplaced_tiles(&self) -> i64 {
        self.grid
            .iter()
            .flatten()
            .zip(GOAL_GRID.iter().flatten())
            .filter(|(tile, goal)| **tile != 0 && tile != goal)
            .count() as i64
    }

    /// Domain-separated content hash of the row-major tile bytes.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let bytes: Vec<u8> = self.grid.iter().flatten().copied().collect();
        canonical_hash(HashDomain::PuzzleState, &bytes)
    }

    /// Compact `"123/804/765"` rendering used in reports and logs.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(|t| char::from(b'0' + t)).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn position_of(grid: &Grid, tile: u8) -> (usize, usize) {
    for (r, row) in grid.iter().enumerate() {
        for (c, &t) in row.iter().enumerate() {
            if t == tile {
                return (r, c);
            }
        }
    }
    // Unreachable for validated grids.
    (0, 0)
}

fn inversions(grid: &Grid) -> usize {
    let tiles: Vec<u8> = grid.iter().flatten().copied().filter(|t| *t != 0).collect();
    let mut count = 0;
    for (i, a) in tiles.iter().enumerate() {
        count += tiles[i + 1..].iter().filter(|b| a > b).count();
    }
    count
}

/// Heuristic used by A\* on the 8-puzzle. All three are admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleHeuristic {
    #[default]
    Manhattan,
    MisplacedTiles,
    /// `h = 0`; A\* degenerates to uniform-cost search.
    Zero,
}

impl PuzzleHeuristic {
    pub const ALL: [PuzzleHeuristic; 3] = [Self::Manhattan, Self::MisplacedTiles, Self::Zero];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::MisplacedTiles => "misplaced_tiles",
            Self::Zero => "zero",
        }
    }

    #[must_use]
    pub fn estimate(self, state: &PuzzleState) -> i64 {
        match self {
            Self::Manhattan => state.manhattan(),
            Self::MisplacedTiles => state.misplaced_tiles(),
            Self::Zero => 0,
        }
    }
}

/// The 8-puzzle state space under a chosen heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EightPuzzle {
    pub heuristic: PuzzleHeuristic,
}

impl EightPuzzle {
    #[must_use]
    pub fn new(heuristic: PuzzleHeuristic) -> Self {
        Self { heuristic }
    }
}

impl StateSpace for EightPuzzle {
    type State = PuzzleState;
    type Action = PuzzleMove;
    type Id = ContentHash;

    fn is_goal(&self, state: &PuzzleState) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &PuzzleState) -> Vec<Successor<PuzzleMove, PuzzleState>> {
        PuzzleMove::ALL
            .into_iter()
            .filter_map(|mv| state.apply(mv).map(|next| Successor::new(mv, next)))
            .collect()
    }

    fn unique_id(&self, state: &PuzzleState) -> ContentHash {
        state.fingerprint()
    }

    fn heuristic(&self, state: &PuzzleState) -> i64 {
        self.heuristic.estimate(state)
    }
}
