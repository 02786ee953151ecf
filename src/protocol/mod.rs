//! Board notation handling.
//!
//! This module implements parsing and serialization for the canonical
//! pipe-separated board notation, the crate's only exchange format.

pub mod notation;

pub use notation::{encode_board, parse_board, FormatError};
