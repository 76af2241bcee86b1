//! Bulk verification CLI.
//!
//! Checks the single-flip encoding scheme against many boards and writes
//! one JSON record per board as JSONL.
//!
//! Usage:
//!   cargo run --release --bin soak -- [OPTIONS]
//!
//! Options:
//!   --boards N       Number of random boards to check (default: 100)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --threads N      Number of parallel threads (default: 4)
//!   --fixtures FILE  Check boards from a JSON fixture file instead
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::Instant;

use deaddrop::soak::{self, SoakConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SoakConfig::default();
    let mut fixtures_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--boards" => {
                i += 1;
                config.num_boards = args[i].parse().expect("invalid --boards value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--fixtures" => {
                i += 1;
                fixtures_path = Some(args[i].clone());
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;

    if !quiet {
        match &fixtures_path {
            Some(path) => {
                eprintln!("Soak: fixture boards from {}, {} threads", path, config.threads)
            }
            None => eprintln!(
                "Soak: {} random boards, seed {}, {} threads",
                config.num_boards, config.seed, config.threads
            ),
        }
    }

    let start = Instant::now();
    let records = match &fixtures_path {
        Some(path) => {
            let boards = match soak::load_fixture_boards(Path::new(path)) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            soak::run_fixtures(&boards)
        }
        None => soak::run_soak(&config),
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Checked {} boards in {:.2}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        soak::print_summary(&records);
    }

    // Write output.
    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            soak::write_jsonl(&records, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            soak::write_jsonl(&records, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: soak [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --boards N       Number of random boards to check (default: 100)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --fixtures FILE  Check boards from a JSON fixture file instead");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
