//! Synthetic test corpus generation.
//!
//! When `--generate` is given, we build a newline-delimited corpus of
//! strings chosen to stress the codec: long single-byte runs, skewed and
//! text-like alphabets, short repeating patterns, near-uniform bytes, and
//! one- or two-byte strings.
//!
//! Strings never contain `\n`, since that byte delimits them.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Longest generated string.
const MAX_STRING_LEN: usize = 4096;

/// Generate a corpus of `count` newline-terminated test strings.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `count`: number of strings
///
/// # Returns
/// Bytes in the same shape as a test-strings file.
pub fn generate_corpus(seed: u64, count: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut corpus = Vec::new();

    for _ in 0..count {
        corpus.extend(generate_string(&mut rng));
        corpus.push(b'\n');
    }

    corpus
}

/// Generate one test string of a randomly chosen shape.
fn generate_string(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let len = rng.gen_range(1..=MAX_STRING_LEN);

    match rng.gen_range(0..10u8) {
        // 20% runs of a single byte
        0..=1 => {
            let byte = non_newline(rng);
            vec![byte; len]
        }

        // 20% heavily skewed: one dominant byte with sparse noise
        2..=3 => {
            let dominant = non_newline(rng);
            (0..len)
                .map(|_| {
                    if rng.gen_range(0..100) < 95 {
                        dominant
                    } else {
                        non_newline(rng)
                    }
                })
                .collect()
        }

        // 20% text-like
        4..=5 => {
            let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,ETAOIN";
            (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect()
        }

        // 10% short repeating patterns
        6 => {
            let pattern = generate_pattern(rng);
            pattern.iter().copied().cycle().take(len).collect()
        }

        // 10% tiny strings
        7 => (0..rng.gen_range(1..=2)).map(|_| non_newline(rng)).collect(),

        // 20% near-uniform bytes
        _ => (0..len).map(|_| non_newline(rng)).collect(),
    }
}

/// Generate a small repeating pattern.
fn generate_pattern(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let pattern_len = rng.gen_range(2..=32);
    (0..pattern_len).map(|_| non_newline(rng)).collect()
}

/// Random byte other than the `\n` delimiter.
fn non_newline(rng: &mut ChaCha8Rng) -> u8 {
    loop {
        let byte: u8 = rng.gen();
        if byte != b'\n' {
            return byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(corpus: &[u8]) -> usize {
        corpus.iter().filter(|&&b| b == b'\n').count()
    }

    #[test]
    fn test_generate_corpus() {
        let corpus = generate_corpus(42, 100);
        assert_eq!(lines(&corpus), 100);
        assert_eq!(corpus.last(), Some(&b'\n'));
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_corpus(12345, 50), generate_corpus(12345, 50));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_corpus(1, 20), generate_corpus(2, 20));
    }

    #[test]
    fn test_no_empty_strings() {
        let corpus = generate_corpus(7, 200);
        assert!(!corpus.windows(2).any(|w| w == b"\n\n"));
        assert_ne!(corpus.first(), Some(&b'\n'));
    }

    #[test]
    fn test_zero_count() {
        assert!(generate_corpus(9, 0).is_empty());
    }
}
