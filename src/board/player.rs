//! Player identities.
//!
//! The two sides of the board. `South` owns row 0 and the goal written
//! first in the board notation; `North` owns row 1.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// The `#[repr(u8)]` attribute enables use as a row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    South = 0,
    North = 1,
}

/// Both players in row order.
pub const ALL_PLAYERS: [Player; 2] = [Player::South, Player::North];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// Returns the row index owned by this player.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the player owning the given row index, if valid.
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::South),
            1 => Some(Player::North),
            _ => None,
        }
    }
}
