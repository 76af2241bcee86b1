//! CPI protocol handling.
//!
//! This module implements parsing and serialization for the CPI (Coin
//! Puzzle Interface) text protocol: board notation, grid rendering, and
//! the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_notation, parse_notation, render_grid, NotationError};
pub use parser::{parse_command, Command};
