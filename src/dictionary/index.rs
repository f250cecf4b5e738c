//! Length-partitioned dictionary index
//!
//! The index groups validated words by length, longest first, with each
//! group sorted alphabetically and free of duplicates. It is immutable once
//! built and shared between readers behind an `Arc`.

use super::source::WordSource;
use crate::core::Word;
use crate::error::EngineError;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// All dictionary words of one length, alphabetically ordered
#[derive(Debug, Clone)]
pub struct LengthBucket {
    pub length: usize,
    pub words: Vec<Word>,
}

/// Immutable dictionary partitioned by word length (descending)
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: Vec<LengthBucket>,
    known: FxHashSet<String>,
}

impl DictionaryIndex {
    /// Build an index from already-validated words
    ///
    /// Duplicates are removed; order of the input does not matter.
    #[must_use]
    pub fn build(mut words: Vec<Word>) -> Self {
        words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.text().cmp(b.text())));
        words.dedup_by(|a, b| a.text() == b.text());

        let known = words.iter().map(|w| w.text().to_string()).collect();

        let mut buckets: Vec<LengthBucket> = Vec::new();
        for word in words {
            match buckets.last_mut() {
                Some(bucket) if bucket.length == word.len() => bucket.words.push(word),
                _ => buckets.push(LengthBucket {
                    length: word.len(),
                    words: vec![word],
                }),
            }
        }

        Self { buckets, known }
    }

    /// Read a source and build its index
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the source cannot be read.
    pub fn load(source: &dyn WordSource) -> Result<Self, EngineError> {
        let start = Instant::now();
        let words = source.load()?;
        let index = Self::build(words);

        log::info!(
            "built dictionary index from {}: {} words across {} lengths in {:.1?}",
            source.name(),
            index.word_count(),
            index.buckets.len(),
            start.elapsed()
        );

        Ok(index)
    }

    /// Word groups ordered longest first
    #[must_use]
    pub fn words_by_length(&self) -> &[LengthBucket] {
        &self.buckets
    }

    /// Distinct word lengths present, longest first
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(|b| b.length)
    }

    /// All words, longest first then alphabetical
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.buckets.iter().flat_map(|b| b.words.iter())
    }

    /// Total number of distinct words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.known.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Dictionary membership, case- and whitespace-insensitive
    ///
    /// Text that could never be a valid entry is simply not known.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.known.contains(w.text()))
    }

    /// The first `count` words in index order (longest first)
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<&Word> {
        self.iter().take(count).collect()
    }
}
