//! Parity encoding and decoding.
//!
//! Implements the covering code at the heart of the puzzle: a 6-bit
//! fingerprint computed from token parities, and the single-flip steering
//! of that fingerprint to any target value.

pub mod fingerprint;
pub mod parity;

pub use fingerprint::{Fingerprint, FINGERPRINT_BITS};
pub use parity::{decode, flip_target};
