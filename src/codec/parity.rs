//! Parity groups and the board codec.
//!
//! The fingerprint is a 6-bit parity vector over six structural subsets
//! of the 64 positions: three column-granularity groups encode the column
//! number in binary and three row-granularity groups encode the row
//! number. A position belongs to group k exactly when bit k of its own
//! index is set, so toggling the token at position P XORs the fingerprint
//! by P. That identity is the whole scheme: to steer a board to `secret`,
//! flip the token at `decode(board) XOR secret`.

use super::fingerprint::Fingerprint;
use crate::board::{column_of, row_of, Board};

fn odd(n: usize) -> bool {
    n % 2 == 1
}

/// Fingerprint bit 0: columns 1, 3, 5, 7.
pub fn odd_column(position: usize) -> bool {
    odd(column_of(position))
}

/// Fingerprint bit 1: columns 2, 3, 6, 7.
pub fn odd_column_pair(position: usize) -> bool {
    odd(column_of(position) / 2)
}

/// Fingerprint bit 2: columns 4-7.
pub fn odd_column_quad(position: usize) -> bool {
    odd(column_of(position) / 4)
}

/// Fingerprint bit 3: rows 1, 3, 5, 7.
pub fn odd_row(position: usize) -> bool {
    odd(row_of(position))
}

/// Fingerprint bit 4: rows 2, 3, 6, 7.
pub fn odd_row_pair(position: usize) -> bool {
    odd(row_of(position) / 2)
}

/// Fingerprint bit 5: rows 4-7.
pub fn odd_row_quad(position: usize) -> bool {
    odd(row_of(position) / 4)
}

/// Decodes the 6-bit fingerprint a board currently shows.
///
/// Each bit is the XOR-sum of the heads tokens in one parity group.
/// Pure and O(64); rendering the result is the caller's concern.
pub fn decode(board: &Board) -> Fingerprint {
    let mut value = 0u8;
    for (position, face) in board.faces.iter().enumerate() {
        if !face.is_heads() {
            continue;
        }
        if odd_column(position) {
            value ^= 1;
        }
        if odd_column_pair(position) {
            value ^= 1 << 1;
        }
        if odd_column_quad(position) {
            value ^= 1 << 2;
        }
        if odd_row(position) {
            value ^= 1 << 3;
        }
        if odd_row_pair(position) {
            value ^= 1 << 4;
        }
        if odd_row_quad(position) {
            value ^= 1 << 5;
        }
    }
    Fingerprint::from_bits(value)
}

/// Computes the position whose flip steers the board's fingerprint to
/// `secret`.
///
/// When the board already encodes `secret` the target is position 0.
/// Callers still perform that flip; it is harmless because position 0
/// sits in none of the six parity groups.
pub fn flip_target(board: &Board, secret: Fingerprint) -> usize {
    (decode(board) ^ secret).position()
}
