//! huffpack: round-trip test harness for the huffpack codec.
//!
//! Loads newline-delimited test strings, runs each through encode and
//! decode, verifies the round trip, and reports compression statistics.
//!
//! ## Usage
//!
//! ```bash
//! # Test strings from stdin
//! huffpack < strings.txt
//!
//! # Test strings from a file
//! huffpack strings.txt
//!
//! # Deterministic synthetic corpus
//! huffpack --generate 1000 --seed 42
//! ```

mod config;
mod corpus;
mod input_gen;
mod runner;
mod stats;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use config::{Args, Config, Source};

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }

    if config.print_config {
        config.print();
    }

    let data = match &config.source {
        Source::File(path) => {
            info!("loading tests from {}", path.display());
            corpus::load(Some(path.as_path()))
        }
        Source::Stdin => corpus::load(None),
        Source::Generated { count } => {
            info!(seed = config.seed, "generating {} test strings", count);
            Ok(input_gen::generate_corpus(config.seed, *count))
        }
    };

    let data = match data {
        Ok(data) => data,
        Err(e) => {
            error!("could not read test strings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let tests = corpus::split_tests(&data);
    if tests.is_empty() {
        warn!("no tests detected, terminating");
        return ExitCode::SUCCESS;
    }
    info!("found {} test strings", tests.len());

    let stats = runner::run_all(&tests, config.progress);
    info!(
        passed = stats.successes(),
        failed = stats.failures,
        "tests complete"
    );
    stats.print_summary();

    ExitCode::SUCCESS
}
