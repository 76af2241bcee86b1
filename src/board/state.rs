//! Board state.
//!
//! Holds the 64 token faces of one board. The board never resizes and
//! carries no derived state; fingerprints are recomputed on demand by
//! the codec.

use rand::Rng;

use super::grid::TOKEN_COUNT;
use super::token::Face;

/// Errors raised by board access.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is outside the board (valid range 0..64)")]
    PositionOutOfRange(usize),
}

/// One coin board: exactly 64 tokens in an 8x8 grid, row-major.
///
/// Uses a fixed-size array indexed by flat position for O(1) access.
/// This avoids heap allocation and makes snapshots cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Face at each position, row-major (position = row * 8 + column).
    pub faces: [Face; TOKEN_COUNT],
}

impl Board {
    /// Creates a board with every token showing tails.
    pub fn all_tails() -> Self {
        Board {
            faces: [Face::Tails; TOKEN_COUNT],
        }
    }

    /// Creates a board with every token showing heads.
    pub fn all_heads() -> Self {
        Board {
            faces: [Face::Heads; TOKEN_COUNT],
        }
    }

    /// Creates a board with each token set by a fair coin drawn from
    /// `rng`. The random source is supplied by the caller so tests can
    /// seed it.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut board = Board::all_tails();
        for face in board.faces.iter_mut() {
            if rng.gen_bool(0.5) {
                *face = Face::Heads;
            }
        }
        board
    }

    /// Flips the token at `position`.
    ///
    /// Positions outside the board are rejected instead of wrapped; a
    /// silent wrap would corrupt the parity groups.
    pub fn toggle(&mut self, position: usize) -> Result<(), BoardError> {
        if position >= TOKEN_COUNT {
            return Err(BoardError::PositionOutOfRange(position));
        }
        self.faces[position] = self.faces[position].toggled();
        Ok(())
    }

    /// Returns an independent copy of the board.
    ///
    /// The verification harness flips coins on snapshots so the original
    /// board is never disturbed.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Number of tokens currently showing heads.
    pub fn heads_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_heads()).count()
    }
}
