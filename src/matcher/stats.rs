//! Statistics over a match result

use crate::core::Word;
use std::collections::BTreeMap;

/// Aggregate figures for a ranked match result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordStats {
    pub total_words: usize,
    /// First word of the result (longest, alphabetically first)
    pub longest_word: Option<String>,
    /// Alphabetically first among the shortest words
    pub shortest_word: Option<String>,
    /// Mean word length, rounded to 2 decimals
    pub average_length: f64,
    /// Word length -> number of words, ascending by length
    pub length_histogram: BTreeMap<usize, usize>,
}

/// Compute statistics for a ranked match result
///
/// Expects the ordering produced by the subset matcher. An empty result
/// gives `WordStats::default()`.
#[must_use]
pub fn calculate_stats(result: &[&Word]) -> WordStats {
    let Some(first) = result.first() else {
        return WordStats::default();
    };

    let mut length_histogram = BTreeMap::new();
    let mut total_length = 0;
    for word in result {
        *length_histogram.entry(word.len()).or_insert(0) += 1;
        total_length += word.len();
    }

    // Ranked results end with the shortest group, alphabetical inside it
    let shortest_len = result.iter().map(|w| w.len()).min().unwrap_or(0);
    let shortest_word = result
        .iter()
        .find(|w| w.len() == shortest_len)
        .map(|w| w.text().to_string());

    let average = total_length as f64 / result.len() as f64;

    WordStats {
        total_words: result.len(),
        longest_word: Some(first.text().to_string()),
        shortest_word,
        average_length: (average * 100.0).round() / 100.0,
        length_histogram,
    }
}
