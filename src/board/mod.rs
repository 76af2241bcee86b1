//! Board representation and token types.
//!
//! Contains the core data structures for tokens, grid geometry, and the
//! overall board state.

pub mod grid;
pub mod state;
pub mod token;

pub use grid::{column_of, row_of, GRID_SIDE, TOKEN_COUNT};
pub use state::{Board, BoardError};
pub use token::Face;
