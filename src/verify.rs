//! Verification harness for the encoding scheme.
//!
//! Exhaustively checks that every 6-bit secret can be planted on a board
//! with a single flip and decoded back. All 64 cases always run; failures
//! are reported per case, never by aborting early. A failing case points
//! at a codec bug, not at a property of the particular board.

use crate::board::{Board, TOKEN_COUNT};
use crate::codec::{decode, flip_target, Fingerprint};

/// Outcome of planting and recovering one secret value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretCase {
    /// The secret that was planted.
    pub secret: Fingerprint,
    /// The position the codec chose to flip.
    pub flip_position: usize,
    /// The fingerprint decoded after the flip.
    pub decoded: Fingerprint,
    /// Whether the decoded fingerprint matched the secret.
    pub passed: bool,
}

/// Results of the 64-case check against one board.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// Fingerprint of the board before any flips.
    pub baseline: Fingerprint,
    /// One case per secret value, in ascending order.
    pub cases: Vec<SecretCase>,
}

impl VerificationReport {
    /// True when every case decoded its secret.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed)
    }

    /// The cases that failed, in order.
    pub fn failures(&self) -> Vec<&SecretCase> {
        self.cases.iter().filter(|c| !c.passed).collect()
    }
}

/// Plants every secret 0..64 on a snapshot of `board` and decodes it
/// back. The input board is never mutated.
pub fn verify_board(board: &Board) -> VerificationReport {
    let baseline = decode(board);
    let mut cases = Vec::with_capacity(TOKEN_COUNT);
    for secret in Fingerprint::all() {
        let position = flip_target(board, secret);
        let mut scratch = board.snapshot();
        scratch
            .toggle(position)
            .expect("flip target is always on the board");
        let decoded = decode(&scratch);
        cases.push(SecretCase {
            secret,
            flip_position: position,
            decoded,
            passed: decoded == secret,
        });
    }
    VerificationReport { baseline, cases }
}
