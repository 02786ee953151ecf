//! Kalaha engine library.
//!
//! Exposes the board representation, sowing resolver, and notation
//! modules for use by integration tests and downstream crates.

pub mod board;
pub mod protocol;
pub mod resolve;
