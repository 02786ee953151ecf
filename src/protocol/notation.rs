//! Board notation encoding and decoding.
//!
//! The notation is a single-line, pipe-separated rendering of a board:
//!
//! `G0|A[N-1]/B[0]|A[N-2]/B[1]|...|A[0]/B[N-1]|G1`
//!
//! where `A` is South's pit row, `B` is North's, and `G0`/`G1` are the two
//! goals. South's row is listed in reverse index order paired against
//! North's row in forward order: the board is drawn as the players see it,
//! the two rows facing each other. Decoding reverses the collected South
//! values to restore forward index order.
//!
//! This string is the sole persisted/exchanged representation of a board;
//! serde serialization goes through it as well.

use std::fmt;
use std::str::FromStr;

use crate::board::player::Player;
use crate::board::state::{Board, ShapeError};

/// Errors that can occur when parsing board notation.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("expected at least 3 '|'-separated fields, got {0}")]
    TooFewFields(usize),

    #[error("invalid seed count: '{0}'")]
    InvalidCount(String),

    #[error("malformed pit pair: '{0}'")]
    MalformedPair(String),

    #[error("board shape: {0}")]
    Shape(#[from] ShapeError),
}

/// Parses a single non-negative seed count field.
fn parse_count(s: &str) -> Result<u32, FormatError> {
    s.parse()
        .map_err(|_| FormatError::InvalidCount(s.to_string()))
}

/// Parses a board from its notation string.
pub fn parse_board(s: &str) -> Result<Board, FormatError> {
    let fields: Vec<&str> = s.split('|').collect();
    if fields.len() < 3 {
        return Err(FormatError::TooFewFields(fields.len()));
    }

    let goals = [
        parse_count(fields[0])?,
        parse_count(fields[fields.len() - 1])?,
    ];

    let pairs = &fields[1..fields.len() - 1];
    let mut south = Vec::with_capacity(pairs.len());
    let mut north = Vec::with_capacity(pairs.len());

    for &pair in pairs {
        let parts: Vec<&str> = pair.split('/').collect();
        if parts.len() != 2 {
            return Err(FormatError::MalformedPair(pair.to_string()));
        }
        south.push(parse_count(parts[0])?);
        north.push(parse_count(parts[1])?);
    }

    // South's row is written mirrored; restore forward index order.
    south.reverse();

    Ok(Board::new([south, north], goals)?)
}

/// Encodes a board into its canonical notation string.
pub fn encode_board(board: &Board) -> String {
    let n = board.row_len();
    let mut fields = Vec::with_capacity(n + 2);

    fields.push(board.goal(Player::South).to_string());
    for j in 0..n {
        fields.push(format!(
            "{}/{}",
            board.pit(Player::South, n - 1 - j),
            board.pit(Player::North, j)
        ));
    }
    fields.push(board.goal(Player::North).to_string());

    fields.join("|")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_board(self))
    }
}

impl FromStr for Board {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Board, FormatError> {
        parse_board(s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        encode_board(&board)
    }
}

impl TryFrom<String> for Board {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Board, FormatError> {
        parse_board(&s)
    }
}

impl TryFrom<&str> for Board {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Board, FormatError> {
        parse_board(s)
    }
}
