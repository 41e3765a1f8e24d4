//! Configuration for the huffpack test harness.
//!
//! Handles parsing command-line arguments and resolving defaults
//! (including a time-based seed that is printed so runs are reproducible).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: test strings are read from
//! stdin, one per line. `--generate` swaps stdin for a seeded synthetic
//! corpus.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(version)]
#[command(about = "Round-trip test harness for the huffpack Huffman codec", long_about = None)]
pub struct Args {
    /// File of newline-delimited test strings (default: stdin)
    pub file: Option<PathBuf>,

    /// Generate N synthetic test strings instead of reading input
    #[arg(long, value_name = "N", conflicts_with = "file")]
    pub generate: Option<usize>,

    /// Random seed for --generate
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,
}

/// Where test strings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Newline-delimited file
    File(PathBuf),
    /// Newline-delimited standard input
    Stdin,
    /// Seeded synthetic corpus of `count` strings
    Generated { count: usize },
}

/// Complete configuration for a harness run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Test string source
    pub source: Source,

    /// Seed for generated corpora
    pub seed: u64,

    /// Maximum log level
    pub log_level: Level,

    /// Whether to draw a progress bar
    pub progress: bool,

    /// Whether to print detailed config
    pub print_config: bool,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// If `--seed` is absent, a time-based seed is chosen.
    pub fn from_args(args: Args) -> Self {
        let source = match (args.generate, args.file) {
            (Some(count), _) => Source::Generated { count },
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };

        let seed = args.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Config {
            source,
            seed,
            log_level: parse_level(&args.log_level),
            progress: !args.no_progress,
            print_config: args.print_config,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.source {
            Source::File(path) => println!("Source: file {}", path.display()),
            Source::Stdin => println!("Source: stdin"),
            Source::Generated { count } => {
                println!("Source: {} generated strings", count);
                println!("Seed: {}", self.seed);
            }
        }
        println!("Log level: {}", self.log_level);
        println!("Progress: {}", if self.progress { "on" } else { "off" });
        println!();
    }
}

/// Map a level name to a tracing level, defaulting to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
