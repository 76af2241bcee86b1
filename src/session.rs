//! Session state management.
//!
//! Holds the current board and serves CPI commands: planting secrets,
//! decoding fingerprints, and running the verification harness. Handlers
//! write responses to any `Write` so tests can capture them.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::codec::{decode, flip_target, Fingerprint};
use crate::protocol::notation::{parse_notation, render_grid};
use crate::verify::verify_board;

/// Holds the mutable state of the session between commands.
pub struct Session {
    pub board: Option<Board>,
    rng: SmallRng,
}

impl Session {
    /// Creates a new session with no board.
    pub fn new() -> Self {
        Session {
            board: None,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Sets the current board from a notation string.
    /// Returns an error message on failure.
    pub fn set_board(&mut self, notation: &str) -> Result<(), String> {
        match parse_notation(notation) {
            Ok(board) => {
                self.board = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse board: {}", e)),
        }
    }

    /// Replaces the board with a random one. A seed makes the board
    /// reproducible; without one the session RNG is drawn from.
    pub fn randomize(&mut self, seed: Option<u64>) {
        let board = match seed {
            Some(s) => Board::random(&mut SmallRng::seed_from_u64(s)),
            None => Board::random(&mut self.rng),
        };
        self.board = Some(board);
    }

    /// Handles the CPI handshake: writes id, protocol_version, and cpiok.
    pub fn handle_cpi<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name deaddrop").unwrap();
        writeln!(out, "id author deaddrop").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "cpiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `show` command: prints the board grid.
    pub fn handle_show<W: Write>(&self, out: &mut W) {
        let board = match &self.board {
            Some(b) => b,
            None => {
                eprintln!("show: no board set");
                return;
            }
        };
        write!(out, "{}", render_grid(board)).unwrap();
        out.flush().unwrap();
    }

    /// Handles the `fingerprint` command: decodes the current board and
    /// prints the value in binary and decimal.
    pub fn handle_fingerprint<W: Write>(&self, out: &mut W) {
        let board = match &self.board {
            Some(b) => b,
            None => {
                eprintln!("fingerprint: no board set");
                return;
            }
        };
        let fp = decode(board);
        writeln!(out, "fingerprint {} {}", fp, fp.value()).unwrap();
        out.flush().unwrap();
    }

    /// Handles the `encode` command: computes the flip for `secret`,
    /// applies it to the board, and reports the flipped position.
    ///
    /// The flip is applied even when the board already encodes the
    /// secret; the target is position 0 in that case, which leaves the
    /// fingerprint untouched.
    pub fn handle_encode<W: Write>(&mut self, secret: u8, out: &mut W) {
        let board = match &mut self.board {
            Some(b) => b,
            None => {
                eprintln!("encode: no board set");
                return;
            }
        };
        let secret = match Fingerprint::new(secret) {
            Some(f) => f,
            None => {
                eprintln!("encode: secret out of range (0-63): {}", secret);
                return;
            }
        };
        let position = flip_target(board, secret);
        board
            .toggle(position)
            .expect("flip target is always on the board");
        writeln!(out, "flip {}", position).unwrap();
        out.flush().unwrap();
    }

    /// Handles the `verify` command: runs the harness and prints one line
    /// per case plus a summary. All 64 cases run even after a failure.
    pub fn handle_verify<W: Write>(&self, out: &mut W) {
        let board = match &self.board {
            Some(b) => b,
            None => {
                eprintln!("verify: no board set");
                return;
            }
        };
        let report = verify_board(board);
        for case in &report.cases {
            writeln!(
                out,
                "case {} flip {} decoded {} {}",
                case.secret.value(),
                case.flip_position,
                case.decoded.value(),
                if case.passed { "ok" } else { "FAILED" }
            )
            .unwrap();
        }
        let passed = report.cases.len() - report.failures().len();
        writeln!(out, "verified {}/{} ok", passed, report.cases.len()).unwrap();
        out.flush().unwrap();
    }
}
