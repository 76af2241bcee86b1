//! Six-bit fingerprints.
//!
//! A fingerprint is the value a board currently encodes. It is derived
//! from the board by the parity decoder on demand and never stored.

use std::fmt;
use std::ops::BitXor;

use crate::board::TOKEN_COUNT;

/// Number of parity bits in a fingerprint.
pub const FINGERPRINT_BITS: u32 = 6;

/// A 6-bit value in 0..64, as decoded from a board.
///
/// Fingerprints and board positions share one value space; that equality
/// is what makes single-flip steering work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u8);

impl Fingerprint {
    /// The all-zero fingerprint.
    pub const ZERO: Fingerprint = Fingerprint(0);

    /// Creates a fingerprint from a raw value. Returns `None` for values
    /// outside 0..64.
    pub fn new(value: u8) -> Option<Fingerprint> {
        if (value as usize) < TOKEN_COUNT {
            Some(Fingerprint(value))
        } else {
            None
        }
    }

    /// Crate-internal constructor for values already known to fit.
    pub(super) const fn from_bits(value: u8) -> Fingerprint {
        Fingerprint(value)
    }

    /// Returns the raw 6-bit value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns this value read as a board position.
    pub const fn position(self) -> usize {
        self.0 as usize
    }

    /// Iterates every fingerprint value in ascending order.
    pub fn all() -> impl Iterator<Item = Fingerprint> {
        (0..TOKEN_COUNT as u8).map(Fingerprint)
    }
}

impl BitXor for Fingerprint {
    type Output = Fingerprint;

    fn bitxor(self, rhs: Fingerprint) -> Fingerprint {
        // XOR of two 6-bit values stays within 6 bits.
        Fingerprint(self.0 ^ rhs.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06b}", self.0)
    }
}
