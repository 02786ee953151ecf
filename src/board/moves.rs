//! Planned moves.
//!
//! A move is planned against a specific board, which validates the chosen
//! pit index up front. Resolution then works on a private copy of that
//! board, so planning and resolving never touch the original.

use super::player::Player;
use super::state::Board;
use crate::resolve;

/// Errors that can occur when planning a move.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("pit index {from} out of range for a row of {len} pits")]
    FromOutOfRange { from: usize, len: usize },
}

/// A move planned against a board: pick up pit `from`, sowing as `mover`.
#[derive(Debug, Clone, Copy)]
pub struct Move<'a> {
    board: &'a Board,
    from: usize,
    mover: Player,
}

impl<'a> Move<'a> {
    pub(crate) fn new(board: &'a Board, from: usize, mover: Player) -> Result<Self, MoveError> {
        let len = board.row_len();
        if from >= len {
            return Err(MoveError::FromOutOfRange { from, len });
        }
        Ok(Move { board, from, mover })
    }

    /// Returns the pit index the move starts from.
    pub fn from_pit(&self) -> usize {
        self.from
    }

    /// Returns the player making the move.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Resolves the move and returns the successor board.
    ///
    /// The board the move was planned against is left unchanged.
    pub fn next_board(&self) -> Board {
        resolve::next_board(self.board, self.from, self.mover)
    }
}
