//! Word check command
//!
//! Reports dictionary membership and, optionally, letter availability.

use crate::engine::WordEngine;
use crate::error::EngineError;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub known: bool,
    /// Whether the word fits in the given letters, if any were given
    pub fits: Option<bool>,
}

/// Check a word against the dictionary and an optional bag
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn check_word(
    engine: &WordEngine,
    word: &str,
    letters: Option<&str>,
) -> Result<CheckResult, EngineError> {
    Ok(CheckResult {
        word: word.trim().to_lowercase(),
        known: engine.is_known_word(word)?,
        fits: letters.map(|letters| WordEngine::can_form_word(letters, word)),
    })
}
