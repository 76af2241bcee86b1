//! Deaddrop engine library.
//!
//! Exposes the board representation, parity codec, verification harness,
//! and protocol modules for use by integration tests and the binary entry
//! points.

pub mod board;
pub mod codec;
pub mod protocol;
pub mod session;
pub mod soak;
pub mod verify;
