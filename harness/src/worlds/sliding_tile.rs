//! Sliding-tile puzzle: an n×n board with one empty tile.
//!
//! Tiles are stored row-major in a flat vector; `0` is the empty tile.
//! A move slides the empty tile one step in a [`Direction`], swapping it
//! with the neighbouring tile. Boards are values: every move builds a new
//! board and equality/hashing look at the tile sequence only.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use thiserror::Error;
use waypoint_kernel::{Edge, Node};
use waypoint_search::SearchWorld;

/// The value that marks the empty tile.
pub const EMPTY: u32 = 0;

/// Direction the empty tile moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in enumeration order. Also the order of
    /// [`Board::neighbours`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Typed failure for board construction and moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// `size` is zero or `tiles.len() != size * size`.
    #[error("board size must be positive and hold size^2 tiles (size {size}, {tiles} tiles)")]
    InvalidDimensions { size: usize, tiles: usize },
    /// The tiles must contain exactly one empty tile.
    #[error("board must contain exactly one empty tile, found {count}")]
    EmptyTileCount { count: usize },
    /// The empty tile sits on the boundary in that direction.
    #[error("cannot move {direction:?} from this configuration")]
    IllegalMove { direction: Direction },
}

/// A square sliding-tile board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    empty: usize,
}

impl Board {
    /// Build an n×n board from row-major `tiles`.
    ///
    /// An empty `tiles` vector yields the solved layout of [`Board::solved`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if `size` is zero or the
    /// tile count is not `size * size`, and [`BoardError::EmptyTileCount`]
    /// unless exactly one tile is [`EMPTY`].
    pub fn new(size: usize, tiles: Vec<u32>) -> Result<Self, BoardError> {
        if tiles.is_empty() {
            return Self::solved(size);
        }
        if size == 0 || size.checked_mul(size) != Some(tiles.len()) {
            return Err(BoardError::InvalidDimensions {
                size,
                tiles: tiles.len(),
            });
        }
        let count = tiles.iter().filter(|&&t| t == EMPTY).count();
        let Some(empty) = tiles.iter().position(|&t| t == EMPTY).filter(|_| count == 1) else {
            return Err(BoardError::EmptyTileCount { count });
        };
        Ok(Self { size, tiles, empty })
    }

    /// The ordered board `0, 1, …, size² - 1` (empty tile top-left).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if `size` is zero or the
    /// tile count does not fit in `u32`.
    pub fn solved(size: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions { size, tiles: 0 };
        if size == 0 {
            return Err(invalid);
        }
        let count = size
            .checked_mul(size)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(invalid)?;
        Ok(Self {
            size,
            tiles: (0..count).collect(),
            empty: 0,
        })
    }

    /// Tiles per row or column.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tile values.
    #[must_use]
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    /// Index of the empty tile in [`Board::tiles`].
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Whether the empty tile can move in `direction`.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        self.target(direction).is_some()
    }

    /// A copy of this board with the empty tile moved one step.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if the empty tile is on the
    /// boundary in `direction`.
    pub fn apply_move(&self, direction: Direction) -> Result<Self, BoardError> {
        let target = self
            .target(direction)
            .ok_or(BoardError::IllegalMove { direction })?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.empty, target);
        Ok(Self {
            size: self.size,
            tiles,
            empty: target,
        })
    }

    /// Apply a sequence of moves, stopping at the first illegal one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] for the first illegal direction.
    pub fn apply_moves<I>(&self, directions: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Direction>,
    {
        directions
            .into_iter()
            .try_fold(self.clone(), |board, d| board.apply_move(d))
    }

    /// Whether `goal` is reachable from this board by legal moves.
    ///
    /// Both boards must hold the same distinct tiles. Every move is one
    /// transposition and shifts the empty tile by one cell, so the parity
    /// of the tile permutation between the boards must equal the parity of
    /// the empty tile's taxicab displacement.
    #[must_use]
    pub fn can_reach(&self, goal: &Board) -> bool {
        if self.size != goal.size {
            return false;
        }
        let positions = tile_positions(&goal.tiles);
        if positions.len() != goal.tiles.len() {
            return false;
        }
        let mut perm = Vec::with_capacity(self.tiles.len());
        let mut seen = vec![false; goal.tiles.len()];
        for tile in &self.tiles {
            match positions.get(tile) {
                Some(&pos) if !seen[pos] => {
                    seen[pos] = true;
                    perm.push(pos);
                }
                // Unknown or repeated tile.
                _ => return false,
            }
        }
        let displacement = self.cell_distance(self.empty, goal.empty);
        permutation_is_odd(&perm) == (displacement % 2 == 1)
    }

    /// Sum of taxicab distances of every non-empty tile to its cell in `goal`.
    ///
    /// Tiles absent from `goal` are ignored.
    #[must_use]
    pub fn manhattan_distance(&self, goal: &Board) -> usize {
        self.manhattan_to(&tile_positions(&goal.tiles))
    }

    fn manhattan_to(&self, goal_positions: &HashMap<u32, usize>) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != EMPTY)
            .filter_map(|(i, tile)| goal_positions.get(tile).map(|&g| self.cell_distance(i, g)))
            .sum()
    }

    fn cell_distance(&self, a: usize, b: usize) -> usize {
        let (ar, ac) = (a / self.size, a % self.size);
        let (br, bc) = (b / self.size, b % self.size);
        ar.abs_diff(br) + ac.abs_diff(bc)
    }

    /// Index the empty tile would move to, if the move is legal.
    fn target(&self, direction: Direction) -> Option<usize> {
        let n = self.size;
        let (row, col) = (self.empty / n, self.empty % n);
        match direction {
            Direction::Up if row > 0 => Some(self.empty - n),
            Direction::Down if row + 1 < n => Some(self.empty + n),
            Direction::Left if col > 0 => Some(self.empty - 1),
            Direction::Right if col + 1 < n => Some(self.empty + 1),
            _ => None,
        }
    }
}

fn tile_positions(tiles: &[u32]) -> HashMap<u32, usize> {
    tiles.iter().enumerate().map(|(i, &t)| (t, i)).collect()
}

fn permutation_is_odd(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut transpositions = 0usize;
    for start in 0..perm.len() {
        let mut len = 0usize;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i];
            len += 1;
        }
        transpositions += len.saturating_sub(1);
    }
    transpositions % 2 == 1
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Node for Board {
    type Label = Direction;

    fn neighbours(&self) -> Vec<Edge<Self>> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| {
                self.apply_move(d)
                    .ok()
                    .map(|next| Edge::new(self.clone(), next, d))
            })
            .collect()
    }
}

/// Search world: reach a fixed goal board.
///
/// The heuristic is the Manhattan distance to the goal, precomputed per tile.
#[derive(Debug, Clone)]
pub struct SlidingTileWorld {
    goal: Board,
    goal_positions: HashMap<u32, usize>,
    world_id: String,
}

impl SlidingTileWorld {
    #[must_use]
    pub fn new(goal: Board) -> Self {
        let goal_positions = tile_positions(&goal.tiles);
        let world_id = format!("sliding_tile_{n}x{n}", n = goal.size);
        Self {
            goal,
            goal_positions,
            world_id,
        }
    }

    /// The board to reach.
    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.goal
    }
}

impl SearchWorld for SlidingTileWorld {
    type Node = Board;

    fn world_id(&self) -> &str {
        &self.world_id
    }

    fn is_goal(&self, node: &Board) -> bool {
        *node == self.goal
    }

    fn heuristic(&self, node: &Board) -> i64 {
        i64::try_from(node.manhattan_to(&self.goal_positions)).unwrap_or(i64::MAX)
    }
}
