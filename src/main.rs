//! Load-Velocity Engine CLI
//!
//! Command-line interface for validating load attempts from NDJSON files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.jsonl > output.jsonl
//! cargo run -- --strict input.jsonl > output.jsonl
//! ```
//!
//! The program reads load attempt records from the input file, validates
//! them against the per-customer velocity limits strictly in arrival order,
//! and writes one decision record per line to stdout.
//!
//! Diagnostics go to stderr (controlled via `RUST_LOG`), so stdout stays a
//! clean result stream.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed record in
//!   --strict mode, etc.)

use load_velocity_engine::cli;
use load_velocity_engine::pipeline;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics to stderr; stdout carries the result log.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process_file(&args.input_file, &mut output, args.strict) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
