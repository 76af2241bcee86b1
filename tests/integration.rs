//! Integration tests for the deaddrop engine binary.
//!
//! Tests full CPI protocol session flow by spawning the engine process,
//! sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_deaddrop");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start deaddrop");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// The all-tails board in notation form.
const ALL_TAILS: &str = "TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT/TTTTTTTT";

/// The all-heads board in notation form.
const ALL_HEADS: &str = "HHHHHHHH/HHHHHHHH/HHHHHHHH/HHHHHHHH/HHHHHHHH/HHHHHHHH/HHHHHHHH/HHHHHHHH";

#[test]
fn cpi_handshake_with_protocol_version() {
    let lines = run_engine(&["cpi", "quit"]);

    assert!(lines.iter().any(|l| l == "id name deaddrop"));
    assert!(lines.iter().any(|l| l == "id author deaddrop"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert!(lines.iter().any(|l| l == "cpiok"));

    // cpiok must be the last line of the handshake
    let cpiok_idx = lines.iter().position(|l| l == "cpiok").unwrap();
    let proto_idx = lines.iter().position(|l| l == "protocol_version 1").unwrap();
    assert!(proto_idx < cpiok_idx, "protocol_version must appear before cpiok");
}

#[test]
fn isready_responds_readyok() {
    let lines = run_engine(&["isready", "quit"]);
    assert!(lines.iter().any(|l| l == "readyok"));
}

#[test]
fn fingerprint_of_all_tails_is_zero() {
    let lines = run_engine(&[&format!("board {}", ALL_TAILS), "fingerprint", "quit"]);
    assert!(lines.iter().any(|l| l == "fingerprint 000000 0"));
}

#[test]
fn encode_42_on_all_tails_flips_position_42() {
    let lines = run_engine(&[
        &format!("board {}", ALL_TAILS),
        "encode 42",
        "fingerprint",
        "quit",
    ]);
    assert!(lines.iter().any(|l| l == "flip 42"));
    assert!(lines.iter().any(|l| l == "fingerprint 101010 42"));
}

#[test]
fn encode_zero_on_all_heads_flips_position_zero() {
    let lines = run_engine(&[
        &format!("board {}", ALL_HEADS),
        "fingerprint",
        "encode 0",
        "fingerprint",
        "quit",
    ]);
    // Every parity group holds 32 heads, so the board decodes to zero
    // both before and after the redundant flip at position 0.
    assert!(lines.iter().any(|l| l == "flip 0"));
    assert_eq!(
        lines.iter().filter(|l| *l == "fingerprint 000000 0").count(),
        2
    );
}

#[test]
fn verify_runs_all_64_cases_and_passes() {
    let lines = run_engine(&[&format!("board {}", ALL_TAILS), "verify", "quit"]);

    let case_lines = lines.iter().filter(|l| l.starts_with("case ")).count();
    assert_eq!(case_lines, 64);
    assert!(lines.iter().any(|l| l == "case 0 flip 0 decoded 0 ok"));
    assert!(lines.iter().any(|l| l == "case 63 flip 63 decoded 63 ok"));
    assert!(lines.iter().any(|l| l == "verified 64/64 ok"));
    assert!(!lines.iter().any(|l| l.contains("FAILED")));
}

#[test]
fn show_prints_the_grid() {
    let lines = run_engine(&[&format!("board {}", ALL_TAILS), "show", "quit"]);
    let grid_lines = lines.iter().filter(|l| *l == "T T T T T T T T").count();
    assert_eq!(grid_lines, 8);
}

#[test]
fn random_with_seed_is_reproducible() {
    let first = run_engine(&["random 7", "show", "fingerprint", "quit"]);
    let second = run_engine(&["random 7", "show", "fingerprint", "quit"]);
    assert_eq!(first, second);
    assert_eq!(first.len(), 9);
}

#[test]
fn verify_passes_on_a_seeded_random_board() {
    let lines = run_engine(&["random 99", "verify", "quit"]);
    assert!(lines.iter().any(|l| l == "verified 64/64 ok"));
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["flibber", "isready", "quit"]);
    assert!(lines.iter().any(|l| l == "readyok"));
}

#[test]
fn malformed_board_leaves_session_usable() {
    let lines = run_engine(&[
        "board garbage",
        &format!("board {}", ALL_TAILS),
        "fingerprint",
        "quit",
    ]);
    assert!(lines.iter().any(|l| l == "fingerprint 000000 0"));
}
