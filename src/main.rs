//! School fees CLI
//!
//! Command-line interface for querying school fee records and reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- dashboard --date 2023-05-12
//! cargo run -- defaulters > defaulters.csv
//! cargo run -- search --class 7 --section A
//! cargo run -- --no-demo-data --roster students.csv students --grade 5
//! cargo run -- --config school-fees.toml settings
//! ```
//!
//! Listings are written to stdout as CSV, settings as JSON. Logs go to
//! stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid config, roster file not found, no search criteria, etc.)

use school_fees_engine::cli;
use school_fees_engine::config::Config;
use school_fees_engine::logging::{init_logging, Verbosity};
use school_fees_engine::types::SchoolError;
use std::process;

fn run(args: &cli::CliArgs) -> Result<(), SchoolError> {
    let config = Config::load_from(args.config.as_deref())?;
    let storage = cli::build_storage(args, &config)?;

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    cli::execute(&args.command, &storage, &config, &mut output)
}

fn main() {
    let args = cli::parse_args();
    init_logging(Verbosity::from_flags(args.quiet, args.verbose));

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
