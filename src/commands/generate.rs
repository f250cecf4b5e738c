//! Bag generation command
//!
//! Generates random puzzle bags and previews their best words.

use crate::engine::WordEngine;
use crate::error::EngineError;
use crate::generator::generate_letter_bag;
use rand::Rng;

/// Words previewed per generated bag
const PREVIEW_WORDS: usize = 5;

/// A generated bag with its top-ranked words
pub struct GeneratedBag {
    pub letters: String,
    pub best_words: Vec<String>,
    pub total_words: usize,
}

impl GeneratedBag {
    /// True if at least one dictionary word can be formed
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.total_words > 0
    }
}

/// Generate `count` bags and look up their words
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn generate_bags<R: Rng + ?Sized>(
    engine: &WordEngine,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedBag>, EngineError> {
    (0..count)
        .map(|_| -> Result<GeneratedBag, EngineError> {
            let letters = generate_letter_bag(rng);
            let words = engine.find_formable_words(&letters, engine.config().max_words)?;
            Ok(GeneratedBag {
                best_words: words.iter().take(PREVIEW_WORDS).cloned().collect(),
                total_words: words.len(),
                letters,
            })
        })
        .collect()
}
