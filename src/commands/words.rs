//! Formable-word and statistics commands
//!
//! Lists the words a letter bag can form and summarizes them.

use crate::engine::WordEngine;
use crate::error::EngineError;
use crate::matcher::WordStats;
use std::time::{Duration, Instant};

/// Result of listing formable words
pub struct WordsResult {
    pub letters: String,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Result of analyzing a letter bag
pub struct StatsResult {
    pub letters: String,
    pub stats: WordStats,
}

/// Find the ranked words formable from `letters`
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn find_words(
    engine: &WordEngine,
    letters: &str,
    max_words: usize,
) -> Result<WordsResult, EngineError> {
    let start = Instant::now();
    let words = engine.find_formable_words(letters, max_words)?;

    Ok(WordsResult {
        letters: letters.trim().to_uppercase(),
        words,
        duration: start.elapsed(),
    })
}

/// Compute statistics for the words formable from `letters`
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn analyze_letters(engine: &WordEngine, letters: &str) -> Result<StatsResult, EngineError> {
    let stats = engine.word_stats(letters, engine.config().max_words)?;

    Ok(StatsResult {
        letters: letters.trim().to_uppercase(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_words_from_embedded_dictionary() {
        let engine = WordEngine::embedded();
        let result = find_words(&engine, " heat ", 50).unwrap();

        assert_eq!(result.letters, "HEAT");
        assert!(result.words.contains(&"heat".to_string()));
        assert!(result.words.contains(&"hate".to_string()));
    }

    #[test]
    fn find_words_soft_fails_on_bad_input() {
        let engine = WordEngine::embedded();
        let result = find_words(&engine, "12!", 50).unwrap();
        assert!(result.words.is_empty());
    }

    #[test]
    fn analyze_letters_reports_totals() {
        let engine = WordEngine::embedded();
        let result = analyze_letters(&engine, "stream").unwrap();

        assert!(result.stats.total_words > 0);
        let sum: usize = result.stats.length_histogram.values().sum();
        assert_eq!(sum, result.stats.total_words);
    }
}
