//! One-shot subset matching
//!
//! Finds every dictionary word whose letters fit inside a query bag. Each
//! word is tested independently against the full query, so two results may
//! use the same letters.

use crate::core::{LetterMultiset, Word};
use crate::dictionary::DictionaryIndex;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Ranked words formable from a bag: longest first, then alphabetical
pub type MatchResult<'a> = Vec<&'a Word>;

/// Effectively unbounded result cap
pub const DEFAULT_MAX_WORDS: usize = 1_000_000;

/// Parse a raw letter string into a query bag
///
/// Returns `None` for input that is empty after trimming or contains
/// anything other than ASCII letters; callers treat that as "no results".
///
/// # Examples
/// ```
/// use wordbag::matcher::query_bag;
///
/// assert!(query_bag(" HeAt ").is_some());
/// assert!(query_bag("").is_none());
/// assert!(query_bag("abc123").is_none());
/// ```
#[must_use]
pub fn query_bag(letters: &str) -> Option<LetterMultiset> {
    let trimmed = letters.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(LetterMultiset::from_str(trimmed))
}

/// Result ordering: descending length, then ascending text
#[must_use]
pub fn rank_order(a: &Word, b: &Word) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.text().cmp(b.text()))
}

/// Matches query bags against a dictionary index
#[derive(Clone, Copy)]
pub struct SubsetMatcher<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> SubsetMatcher<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// All words formable from `query`, at most `max_words` of them
    ///
    /// The dictionary is scanned longest word first, so when the cap cuts the
    /// scan short the longest candidates are the ones kept.
    #[must_use]
    pub fn find(&self, query: &LetterMultiset, max_words: usize) -> MatchResult<'a> {
        if query.is_empty() || max_words == 0 {
            return Vec::new();
        }

        let query_mask = query.letter_mask();
        let available = query.len();
        let mut matches: MatchResult<'a> = Vec::new();

        for bucket in self.index.words_by_length() {
            if bucket.length > available {
                continue;
            }

            let found: Vec<&'a Word> = bucket
                .words
                .par_iter()
                // Cheap reject: uses a letter the query lacks entirely
                .filter(|word| word.letter_mask() & !query_mask == 0)
                .filter(|word| query.can_form(word.letters()))
                .collect();
            matches.extend(found);

            if matches.len() >= max_words {
                log::debug!("match cap of {max_words} reached at length {}", bucket.length);
                matches.truncate(max_words);
                break;
            }
        }

        matches.sort_by(|a, b| rank_order(a, b));
        matches
    }

    /// Like `find`, starting from a raw letter string
    ///
    /// Invalid input yields an empty result.
    #[must_use]
    pub fn find_str(&self, letters: &str, max_words: usize) -> MatchResult<'a> {
        query_bag(letters).map_or_else(Vec::new, |query| self.find(&query, max_words))
    }

    /// True if at least one dictionary word is formable from `query`
    #[must_use]
    pub fn any(&self, query: &LetterMultiset) -> bool {
        !self.find(query, 1).is_empty()
    }
}
