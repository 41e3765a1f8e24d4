//! Loading and splitting test strings.
//!
//! A corpus is newline-delimited. Every line is one test string, including
//! empty lines; a final line without a trailing newline still counts. Each
//! test string gets a `0x00` terminator appended, which is encoded along with
//! it and counted in its length.

use std::io::{self, Read};
use std::path::Path;

/// Marker byte appended to every test string.
pub const TERMINATOR: u8 = 0;

/// Read a whole corpus from `path`, or from stdin when `path` is `None`.
pub fn load(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Split a corpus into terminated test strings.
pub fn split_tests(data: &[u8]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return Vec::new();
    }

    let body = data.strip_suffix(b"\n").unwrap_or(data);
    body.split(|&b| b == b'\n')
        .map(|line| {
            let mut test = Vec::with_capacity(line.len() + 1);
            test.extend_from_slice(line);
            test.push(TERMINATOR);
            test
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terminated_lines() {
        let tests = split_tests(b"abc\nde\n");
        assert_eq!(tests, vec![b"abc\0".to_vec(), b"de\0".to_vec()]);
    }

    #[test]
    fn test_trailing_line_without_newline() {
        let tests = split_tests(b"abc\nde");
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[1], b"de\0");
    }

    #[test]
    fn test_empty_lines_count() {
        let tests = split_tests(b"a\n\nb\n");
        assert_eq!(tests, vec![b"a\0".to_vec(), b"\0".to_vec(), b"b\0".to_vec()]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(split_tests(b"").is_empty());
    }

    #[test]
    fn test_lone_newline() {
        assert_eq!(split_tests(b"\n"), vec![b"\0".to_vec()]);
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("huffpack-corpus-{}.txt", std::process::id()));
        std::fs::write(&path, b"one\ntwo\n").unwrap();
        let data = load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(split_tests(&data).len(), 2);
    }
}
