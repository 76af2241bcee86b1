//! Grid geometry.
//!
//! Maps flat token positions to rows and columns. All queries here are
//! pure functions of the index; the board itself stores no derived state.

/// Number of token squares on the board.
pub const TOKEN_COUNT: usize = 64;

/// Squares per row (and rows per board).
pub const GRID_SIDE: usize = 8;

/// Returns the column (0-7) of a flat position.
pub const fn column_of(position: usize) -> usize {
    position % GRID_SIDE
}

/// Returns the row (0-7) of a flat position.
pub const fn row_of(position: usize) -> usize {
    position / GRID_SIDE
}
