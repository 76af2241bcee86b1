//! CPI command parser.
//!
//! Parses incoming CPI protocol commands from raw text into structured
//! `Command` variants that the session main loop can dispatch on.

use crate::board::TOKEN_COUNT;

/// A parsed server-to-engine CPI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the CPI protocol handshake.
    Cpi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set the session board from a notation string.
    Board { notation: String },

    /// Replace the session board with a random one, optionally seeded.
    Random { seed: Option<u64> },

    /// Print the board as a grid.
    Show,

    /// Decode and print the current fingerprint.
    Fingerprint,

    /// Plant a secret on the board with a single flip.
    Encode { secret: u8 },

    /// Run the 64-secret verification harness on the current board.
    Verify,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to
/// stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "cpi" => Some(Command::Cpi),
        "isready" => Some(Command::IsReady),
        "show" => Some(Command::Show),
        "fingerprint" => Some(Command::Fingerprint),
        "verify" => Some(Command::Verify),
        "quit" => Some(Command::Quit),

        "board" => parse_board(&tokens),
        "random" => parse_random(&tokens),
        "encode" => parse_encode(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `board <notation>`.
fn parse_board(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed board: expected 'board <notation>'");
        return None;
    }
    // Notation is a single token (no spaces) following "board"
    let notation = tokens[1].to_string();
    Some(Command::Board { notation })
}

/// Parses `random [seed]`.
fn parse_random(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        1 => Some(Command::Random { seed: None }),
        2 => match tokens[1].parse::<u64>() {
            Ok(seed) => Some(Command::Random { seed: Some(seed) }),
            Err(_) => {
                eprintln!("invalid seed value: '{}'", tokens[1]);
                None
            }
        },
        _ => {
            eprintln!("malformed random: expected 'random [seed]'");
            None
        }
    }
}

/// Parses `encode <secret>` with the secret in 0..64.
fn parse_encode(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed encode: expected 'encode <secret>'");
        return None;
    }
    match tokens[1].parse::<u8>() {
        Ok(secret) if (secret as usize) < TOKEN_COUNT => Some(Command::Encode { secret }),
        Ok(secret) => {
            eprintln!("secret out of range (0-63): {}", secret);
            None
        }
        Err(_) => {
            eprintln!("invalid secret value: '{}'", tokens[1]);
            None
        }
    }
}
