//! Bulk verification over many boards.
//!
//! Runs the 64-secret harness against randomly initialized boards, or
//! against boards loaded from a fixture file, and reports one record per
//! board. With more than one thread, boards are checked concurrently on a
//! rayon pool and delivered back over a channel.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::board::Board;
use crate::protocol::notation::{encode_notation, parse_notation, NotationError};
use crate::verify::verify_board;

/// Configuration for a soak run.
#[derive(Clone)]
pub struct SoakConfig {
    /// Number of random boards to check.
    pub num_boards: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads for concurrent checks.
    pub threads: usize,
    /// Suppress per-board progress output.
    pub quiet: bool,
}

impl Default for SoakConfig {
    fn default() -> Self {
        SoakConfig {
            num_boards: 100,
            seed: 0,
            threads: 4,
            quiet: false,
        }
    }
}

/// Result of soaking one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    /// Sequential board ID.
    pub board_id: usize,
    /// Notation of the board as checked.
    pub notation: String,
    /// Fingerprint of the untouched board.
    pub baseline: u8,
    /// Secrets whose round trip failed.
    pub failed_secrets: Vec<u8>,
    /// Whether all 64 secrets round-tripped.
    pub passed: bool,
}

/// Checks a single board and flattens the harness report into a record.
pub fn check_board(board_id: usize, board: &Board) -> BoardRecord {
    let report = verify_board(board);
    let failed_secrets: Vec<u8> = report.failures().iter().map(|c| c.secret.value()).collect();
    BoardRecord {
        board_id,
        notation: encode_notation(board),
        baseline: report.baseline.value(),
        passed: failed_secrets.is_empty(),
        failed_secrets,
    }
}

fn board_rng(config: &SoakConfig, i: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(i as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs the soak over `config.num_boards` random boards.
///
/// When `config.threads > 1`, boards are checked concurrently using
/// rayon. Records are returned in board-ID order regardless of which
/// worker finished first.
pub fn run_soak(config: &SoakConfig) -> Vec<BoardRecord> {
    let mut records = Vec::with_capacity(config.num_boards);
    if config.threads > 1 {
        run_soak_parallel(config, |r| records.push(r));
    } else {
        run_soak_serial(config, |r| records.push(r));
    }
    // Channel delivery order depends on thread timing.
    records.sort_by_key(|r| r.board_id);
    records
}

fn run_soak_serial<F>(config: &SoakConfig, mut on_record: F)
where
    F: FnMut(BoardRecord),
{
    for i in 0..config.num_boards {
        let mut rng = board_rng(config, i);
        let board = Board::random(&mut rng);
        let record = check_board(i, &board);
        if !config.quiet {
            eprintln!(
                "Board {}/{}: {}",
                i + 1,
                config.num_boards,
                if record.passed { "ok" } else { "FAILED" }
            );
        }
        on_record(record);
    }
}

/// Parallel soak: checks boards concurrently using rayon.
/// Uses a channel to deliver completed records to the callback from
/// worker threads.
fn run_soak_parallel<F>(config: &SoakConfig, mut on_record: F)
where
    F: FnMut(BoardRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<BoardRecord>();

    // Build thread pool with configured thread count.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_boards)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = board_rng(&config_clone, i);
                    let board = Board::random(&mut rng);
                    let record = check_board(i, &board);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        eprintln!(
                            "Board {}/{}: {}",
                            n,
                            config_clone.num_boards,
                            if record.passed { "ok" } else { "FAILED" }
                        );
                    }
                    let _ = tx.send(record);
                });
        });
    });

    // Receive completed records on the main thread and pass to callback.
    for record in rx {
        on_record(record);
    }

    handle.join().expect("soak worker thread panicked");
}

/// Errors raised while loading a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse fixture file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture board {index}: {source}")]
    Notation { index: usize, source: NotationError },
}

/// On-disk fixture format: boards in notation form.
#[derive(Debug, Deserialize)]
struct FixtureFile {
    boards: Vec<String>,
}

/// Loads fixture boards from a JSON file of the form
/// `{ "boards": ["TTTTTTTT/.../TTTTTTTT", ...] }`.
pub fn load_fixture_boards(path: &Path) -> Result<Vec<Board>, FixtureError> {
    let text = fs::read_to_string(path)?;
    let file: FixtureFile = serde_json::from_str(&text)?;
    let mut boards = Vec::with_capacity(file.boards.len());
    for (index, notation) in file.boards.iter().enumerate() {
        let board = parse_notation(notation)
            .map_err(|source| FixtureError::Notation { index, source })?;
        boards.push(board);
    }
    Ok(boards)
}

/// Checks a fixed set of boards in order, serially.
pub fn run_fixtures(boards: &[Board]) -> Vec<BoardRecord> {
    boards
        .iter()
        .enumerate()
        .map(|(i, b)| check_board(i, b))
        .collect()
}

/// Writes records as JSONL (one JSON object per board, one per line).
///
/// Notation text is drawn from `H`, `T`, and `/` only, so no JSON string
/// escaping is needed.
pub fn write_jsonl<W: Write>(records: &[BoardRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        write!(
            out,
            "{{\"board_id\":{},\"notation\":\"{}\",\"baseline\":{},\"passed\":{},\"failed_secrets\":[",
            record.board_id, record.notation, record.baseline, record.passed
        )?;
        for (i, secret) in record.failed_secrets.iter().enumerate() {
            if i > 0 {
                write!(out, ",")?;
            }
            write!(out, "{}", secret)?;
        }
        writeln!(out, "]}}")?;
    }
    Ok(())
}

/// Prints an aggregate summary of a soak run to stderr.
pub fn print_summary(records: &[BoardRecord]) {
    let passed = records.iter().filter(|r| r.passed).count();
    eprintln!("Soak summary:");
    eprintln!("  boards checked: {}", records.len());
    eprintln!("  passed: {}", passed);
    eprintln!("  failed: {}", records.len() - passed);
}
