//! Deaddrop -- a coin-board signaling engine implementing the CPI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the CPI (Coin Puzzle Interface) convention.

use std::io::{self, BufRead};

use deaddrop::protocol::parser::{parse_command, Command};
use deaddrop::session::Session;

/// Runs the main CPI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Cpi => {
                session.handle_cpi(&mut out);
            }
            Command::IsReady => {
                session.handle_isready(&mut out);
            }
            Command::Board { notation } => {
                if let Err(e) = session.set_board(&notation) {
                    eprintln!("{}", e);
                }
            }
            Command::Random { seed } => {
                session.randomize(seed);
            }
            Command::Show => {
                session.handle_show(&mut out);
            }
            Command::Fingerprint => {
                session.handle_fingerprint(&mut out);
            }
            Command::Encode { secret } => {
                session.handle_encode(secret, &mut out);
            }
            Command::Verify => {
                session.handle_verify(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
