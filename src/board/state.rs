//! Board state representation.
//!
//! Holds the complete snapshot of a game at a given point in time: two
//! equal-length rows of seed pits and the two goals.

use serde::{Deserialize, Serialize};

use super::moves::{Move, MoveError};
use super::player::Player;

/// Errors that can occur when constructing a board.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("pit rows differ in length: south has {south}, north has {north}")]
    RowLengthMismatch { south: usize, north: usize },

    #[error("pit rows must hold at least one pit")]
    EmptyRows,
}

/// Complete board state: two pit rows and two goals.
///
/// Boards are value types. Resolving a move never mutates the input board;
/// it produces a new one. `Clone` copies both rows, so a clone shares no
/// storage with the original.
///
/// Serialization goes through the canonical board notation, so a `Board`
/// embedded in JSON or similar appears as a single notation string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Seed counts per pit, indexed by `Player as usize`.
    pub(crate) pits: [Vec<u32>; 2],
    /// Banked seeds per goal, indexed by `Player as usize`.
    pub(crate) goals: [u32; 2],
}

impl Board {
    /// Creates a board from explicit rows and goals.
    ///
    /// Both rows must have the same, non-zero length.
    pub fn new(pits: [Vec<u32>; 2], goals: [u32; 2]) -> Result<Board, ShapeError> {
        let [south, north] = &pits;
        if south.len() != north.len() {
            return Err(ShapeError::RowLengthMismatch {
                south: south.len(),
                north: north.len(),
            });
        }
        if south.is_empty() {
            return Err(ShapeError::EmptyRows);
        }
        Ok(Board { pits, goals })
    }

    /// Creates a board with `len` empty pits per row and empty goals.
    pub fn empty(len: usize) -> Result<Board, ShapeError> {
        Board::new([vec![0; len], vec![0; len]], [0, 0])
    }

    /// Creates the opening layout: `len` pits per row, each holding
    /// `seeds`, and empty goals.
    pub fn standard(len: usize, seeds: u32) -> Result<Board, ShapeError> {
        Board::new([vec![seeds; len], vec![seeds; len]], [0, 0])
    }

    /// Returns the number of pits in each row.
    pub fn row_len(&self) -> usize {
        self.pits[0].len()
    }

    /// Returns the pit row owned by the given player.
    pub fn row(&self, owner: Player) -> &[u32] {
        &self.pits[owner.index()]
    }

    /// Returns the seed count of one pit.
    ///
    /// Panics if `index` is out of range.
    pub fn pit(&self, owner: Player, index: usize) -> u32 {
        self.pits[owner.index()][index]
    }

    /// Returns the seed count banked in the given player's goal.
    pub fn goal(&self, owner: Player) -> u32 {
        self.goals[owner.index()]
    }

    /// Returns the total seed count across both rows and both goals.
    ///
    /// Every resolved move conserves this total.
    pub fn total(&self) -> u64 {
        let pits: u64 = self.pits.iter().flatten().map(|&s| u64::from(s)).sum();
        let goals: u64 = self.goals.iter().map(|&g| u64::from(g)).sum();
        pits + goals
    }

    /// Plans a move picking up pit `from` and sowing as `mover`.
    ///
    /// Fails when `from` does not address a pit on the row.
    pub fn plan_move(&self, from: usize, mover: Player) -> Result<Move<'_>, MoveError> {
        Move::new(self, from, mover)
    }
}
