//! Combination command
//!
//! Finds groups of words that can be played together from one bag.

use crate::engine::WordEngine;
use crate::error::EngineError;
use std::time::{Duration, Instant};

/// Result of a combination search
pub struct CombosResult {
    pub letters: String,
    pub combinations: Vec<Vec<String>>,
    pub duration: Duration,
}

impl CombosResult {
    /// Letters used by a combination
    #[must_use]
    pub fn score(combination: &[String]) -> usize {
        combination.iter().map(String::len).sum()
    }
}

/// Search combinations for `letters`
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn find_combos(
    engine: &WordEngine,
    letters: &str,
    max_combinations: usize,
) -> Result<CombosResult, EngineError> {
    let start = Instant::now();
    let combinations = engine.find_combinations(letters, max_combinations)?;

    Ok(CombosResult {
        letters: letters.trim().to_uppercase(),
        combinations,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combos_are_capped_and_ranked() {
        let engine = WordEngine::embedded();
        let result = find_combos(&engine, "heatstarmindfire", 5).unwrap();

        assert_eq!(result.letters, "HEATSTARMINDFIRE");
        assert!(!result.combinations.is_empty());
        assert!(result.combinations.len() <= 5);
        assert!(
            result
                .combinations
                .windows(2)
                .all(|pair| CombosResult::score(&pair[0]) >= CombosResult::score(&pair[1]))
        );
    }

    #[test]
    fn score_counts_letters() {
        let combination = vec!["heat".to_string(), "at".to_string()];
        assert_eq!(CombosResult::score(&combination), 6);
    }
}
