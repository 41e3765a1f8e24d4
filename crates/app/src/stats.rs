//! Statistics for a harness run.
//!
//! This module aggregates per-test results:
//! - Pass/fail counts
//! - Best and worst compression ratio (compressed / decompressed)
//! - Average decompressed and compressed sizes over passing tests
//! - Timing information
//!
//! # Design
//!
//! Results are recorded one test at a time from a single thread; the
//! struct is a plain accumulator.

use std::time::{Duration, Instant};

/// Sizes observed for one passing test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Index of the test string in the corpus (0-based)
    pub index: usize,

    /// Input length, including the terminator byte
    pub decompressed_len: usize,

    /// Encoded length
    pub compressed_len: usize,
}

impl TestResult {
    /// Compression ratio (compressed / decompressed).
    pub fn ratio(&self) -> f64 {
        if self.decompressed_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 / self.decompressed_len as f64
        }
    }
}

/// Aggregate statistics for a run.
#[derive(Debug, Clone)]
pub struct RunStats {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Counts ===
    /// Tests attempted
    pub tests: u64,

    /// Tests that failed to encode, decode, or compare
    pub failures: u64,

    // === Sizes ===
    /// Sum of decompressed lengths over passing tests
    pub total_decompressed: u64,

    /// Sum of compressed lengths over passing tests
    pub total_compressed: u64,

    /// Lowest ratio seen
    pub best: Option<TestResult>,

    /// Highest ratio seen
    pub worst: Option<TestResult>,
}

impl RunStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            tests: 0,
            failures: 0,
            total_decompressed: 0,
            total_compressed: 0,
            best: None,
            worst: None,
        }
    }

    /// Record a passing test.
    pub fn record_success(&mut self, result: TestResult) {
        self.tests += 1;
        self.total_decompressed += result.decompressed_len as u64;
        self.total_compressed += result.compressed_len as u64;

        if self.best.map_or(true, |best| result.ratio() < best.ratio()) {
            self.best = Some(result);
        }
        if self.worst.map_or(true, |worst| result.ratio() > worst.ratio()) {
            self.worst = Some(result);
        }
    }

    /// Record a failing test.
    pub fn record_failure(&mut self) {
        self.tests += 1;
        self.failures += 1;
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Number of passing tests.
    pub fn successes(&self) -> u64 {
        self.tests - self.failures
    }

    /// Percentage of tests that passed.
    pub fn success_rate(&self) -> f64 {
        if self.tests == 0 {
            0.0
        } else {
            100.0 * self.successes() as f64 / self.tests as f64
        }
    }

    /// Average `(decompressed, compressed)` sizes over passing tests.
    pub fn average(&self) -> Option<(u64, u64)> {
        let n = self.successes();
        if n == 0 {
            None
        } else {
            Some((self.total_decompressed / n, self.total_compressed / n))
        }
    }

    /// Overall compression ratio across passing tests.
    pub fn overall_ratio(&self) -> f64 {
        if self.total_decompressed == 0 {
            0.0
        } else {
            self.total_compressed as f64 / self.total_decompressed as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Results ===");
        println!("Tests completed: {}", self.tests);
        println!("Successful tests: {} ({:.1}%)", self.successes(), self.success_rate());
        println!(
            "Failed tests: {} ({:.1}%)",
            self.failures,
            if self.tests == 0 { 0.0 } else { 100.0 - self.success_rate() }
        );
        println!("Duration: {} ms", self.duration().as_millis());

        println!("\n=== Best case ===");
        print_result(self.best.as_ref());
        println!("\n=== Worst case ===");
        print_result(self.worst.as_ref());

        println!("\n=== Average case ===");
        match self.average() {
            Some((decompressed, compressed)) => {
                println!("Decompressed length: {}", decompressed);
                println!("Compressed length: {}", compressed);
                println!("Compression ratio: {:.2}", self.overall_ratio());
            }
            None => println!("(no passing tests)"),
        }
        println!();
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

fn print_result(result: Option<&TestResult>) {
    match result {
        Some(r) => {
            println!("Test number: {}", r.index);
            println!("Decompressed length: {}", r.decompressed_len);
            println!("Compressed length: {}", r.compressed_len);
            println!("Compression ratio: {:.2}", r.ratio());
        }
        None => println!("(no passing tests)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, decompressed_len: usize, compressed_len: usize) -> TestResult {
        TestResult {
            index,
            decompressed_len,
            compressed_len,
        }
    }

    #[test]
    fn test_stats_creation() {
        let stats = RunStats::new();
        assert!(stats.end_time.is_none());
        assert_eq!(stats.tests, 0);
        assert!(stats.best.is_none());
        assert!(stats.average().is_none());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(result(0, 1000, 750).ratio(), 0.75);
        assert_eq!(result(0, 0, 10).ratio(), 0.0);
    }

    #[test]
    fn test_best_and_worst() {
        let mut stats = RunStats::new();
        stats.record_success(result(0, 100, 50));
        stats.record_success(result(1, 100, 150));
        stats.record_success(result(2, 100, 20));

        assert_eq!(stats.best.unwrap().index, 2);
        assert_eq!(stats.worst.unwrap().index, 1);
    }

    #[test]
    fn test_failures_excluded_from_average() {
        let mut stats = RunStats::new();
        stats.record_success(result(0, 100, 40));
        stats.record_success(result(1, 300, 60));
        stats.record_failure();

        assert_eq!(stats.tests, 3);
        assert_eq!(stats.successes(), 2);
        assert_eq!(stats.average(), Some((200, 50)));
        assert_eq!(stats.overall_ratio(), 0.25);
    }

    #[test]
    fn test_success_rate() {
        let mut stats = RunStats::new();
        stats.record_success(result(0, 10, 10));
        stats.record_failure();
        stats.record_failure();
        stats.record_success(result(3, 10, 10));

        assert_eq!(stats.success_rate(), 50.0);
    }
}
