//! Round-trip execution of a corpus.
//!
//! Each test string is encoded, decoded, and byte-compared. Any failure is
//! counted against that test only; the run always continues.

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{debug, warn};

use crate::stats::{RunStats, TestResult};

/// Why a single test failed.
#[derive(Debug, Error)]
pub enum TestFailure {
    /// Encoder returned an error
    #[error("failed to encode: {0}")]
    Encode(#[source] huffpack_core::Error),

    /// Decoder returned an error
    #[error("failed to decode: {0}")]
    Decode(#[source] huffpack_core::Error),

    /// Round trip produced different bytes
    #[error("failed comparison: {decoded_len} bytes decoded from {input_len}")]
    Mismatch { input_len: usize, decoded_len: usize },
}

/// Encode, decode, and compare one test string.
pub fn run_test(index: usize, input: &[u8]) -> Result<TestResult, TestFailure> {
    let encoded = huffpack_core::encode(input).map_err(TestFailure::Encode)?;
    let decoded = huffpack_core::decode(&encoded).map_err(TestFailure::Decode)?;

    if decoded != input {
        return Err(TestFailure::Mismatch {
            input_len: input.len(),
            decoded_len: decoded.len(),
        });
    }

    Ok(TestResult {
        index,
        decompressed_len: input.len(),
        compressed_len: encoded.len(),
    })
}

/// Run every test and collect statistics.
pub fn run_all(tests: &[Vec<u8>], show_progress: bool) -> RunStats {
    let progress = if show_progress {
        ProgressBar::new(tests.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[+] Test completion: [{bar:70}] {percent}% ({pos}/{len})")
    {
        progress.set_style(style.progress_chars("=> "));
    }

    let mut stats = RunStats::new();
    let total = tests.len();

    for (index, input) in tests.iter().enumerate() {
        match run_test(index, input) {
            Ok(result) => {
                debug!(
                    test = index + 1,
                    decompressed = result.decompressed_len,
                    compressed = result.compressed_len,
                    "round trip ok"
                );
                stats.record_success(result);
            }
            Err(failure) => {
                progress.suspend(|| warn!("test {}/{}: {}", index + 1, total, failure));
                stats.record_failure();
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    stats.complete();
    stats
}
