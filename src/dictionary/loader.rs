//! Word list loading utilities
//!
//! Turns raw newline-delimited text into validated `Word`s. Malformed lines
//! are dropped, never reported as errors.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse raw lines into valid words
///
/// Returns the valid words in input order along with the number of
/// non-blank lines that failed validation.
pub fn parse_lines<'a, I>(lines: I) -> (Vec<Word>, usize)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = 0;
    let words = lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::trace!("skipping dictionary line {line:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    (words, skipped)
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
/// Lines that are not valid UTF-8 are skipped like any other malformed line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordbag::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let bytes = fs::read(path)?;
    let mut undecodable = 0;
    let lines = bytes
        .split(|&b| b == b'\n')
        .filter_map(|line| match std::str::from_utf8(line) {
            Ok(line) => Some(line),
            Err(e) => {
                log::trace!("skipping undecodable dictionary line: {e}");
                undecodable += 1;
                None
            }
        });
    let (words, invalid) = parse_lines(lines);
    let skipped = invalid + undecodable;
    if skipped > 0 {
        log::debug!("dropped {skipped} malformed dictionary lines");
    }
    Ok(words)
}

/// Convert a string slice list to a Word vector
///
/// # Examples
/// ```
/// use wordbag::dictionary::loader::words_from_slice;
///
/// let words = words_from_slice(&["heat", "not a word", "STAR"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied()).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["heat", "star", "mind"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "heat");
        assert_eq!(words[1].text(), "star");
        assert_eq!(words[2].text(), "mind");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["heat", "ice-cream", "abcdefghijklmnop", "", "b4", "star"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "heat");
        assert_eq!(words[1].text(), "star");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn parse_lines_counts_skipped_but_not_blank() {
        let (words, skipped) = parse_lines(["  Fire ", "", "   ", "x-ray", "o'clock"]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "fire");
        assert_eq!(skipped, 2);
    }

    #[test]
    fn load_from_file_normalizes_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "HEAT\n  star  \n\nmind\r\nnot valid\nfire").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["heat", "star", "mind", "fire"]);
    }

    #[test]
    fn load_from_file_skips_non_utf8_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"heat\ncaf\xe9\nstar\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["heat", "star"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
