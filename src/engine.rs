//! Main word engine interface
//!
//! `WordEngine` is what a game session talks to. It owns the cached
//! dictionary index and exposes string-in, string-out entry points. Invalid
//! letters or words never raise; they produce empty or negative answers.
//! The only error is a dictionary that cannot be loaded.

use crate::config::EngineConfig;
use crate::core::Word;
use crate::dictionary::{DictionaryIndex, FileSource, IndexCache, StaticSource, WordSource};
use crate::error::EngineError;
use crate::matcher::{CombinationGenerator, SubsetMatcher, WordStats, calculate_stats, query_bag};
use std::sync::Arc;

/// Letter-bag word engine over a cached dictionary
pub struct WordEngine {
    cache: IndexCache,
    config: EngineConfig,
}

impl WordEngine {
    /// Create an engine for the configured dictionary
    ///
    /// Reads `config.dictionary_path` if set, otherwise the embedded list.
    /// Nothing is loaded until the first query.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let source: Box<dyn WordSource> = match &config.dictionary_path {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(StaticSource::embedded()),
        };
        Self {
            cache: IndexCache::from_boxed(source, config.cache_ttl),
            config,
        }
    }

    /// Create an engine over an arbitrary word source
    ///
    /// `config.dictionary_path` is ignored.
    pub fn with_source(source: impl WordSource + 'static, config: EngineConfig) -> Self {
        Self {
            cache: IndexCache::new(source, config.cache_ttl),
            config,
        }
    }

    /// Engine over the embedded dictionary with default settings
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EngineConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the backing dictionary source
    #[must_use]
    pub fn source_name(&self) -> String {
        self.cache.source_name()
    }

    /// The current dictionary index, loading it if needed
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn index(&self) -> Result<Arc<DictionaryIndex>, EngineError> {
        self.cache.get()
    }

    /// Drop the cached index; the next call reloads the dictionary
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    /// Ranked words formable from `letters`, at most `max_words`
    ///
    /// Longest words come first, ties alphabetical.
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    ///
    /// # Examples
    /// ```
    /// use wordbag::WordEngine;
    ///
    /// let engine = WordEngine::embedded();
    /// let words = engine.find_formable_words("HEAT", 10).unwrap();
    /// assert_eq!(words[0], "hate");
    /// assert!(engine.find_formable_words("123", 10).unwrap().is_empty());
    /// ```
    pub fn find_formable_words(
        &self,
        letters: &str,
        max_words: usize,
    ) -> Result<Vec<String>, EngineError> {
        let Some(query) = query_bag(letters) else {
            return Ok(Vec::new());
        };
        let index = self.index()?;
        let result = SubsetMatcher::new(&index).find(&query, max_words);
        Ok(result.into_iter().map(|w| w.text().to_string()).collect())
    }

    /// Ranked word combinations playable together from `letters`
    ///
    /// At most `max_combinations` are returned, best (most letters used)
    /// first. The candidate pool is capped at `config.combination_pool`.
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn find_combinations(
        &self,
        letters: &str,
        max_combinations: usize,
    ) -> Result<Vec<Vec<String>>, EngineError> {
        let Some(bag) = query_bag(letters) else {
            return Ok(Vec::new());
        };
        let index = self.index()?;

        // Only the top of the ranking can enter the pool
        let pool = SubsetMatcher::new(&index).find(&bag, self.config.combination_pool);
        let generator = CombinationGenerator::new(max_combinations, self.config.combination_pool);

        Ok(generator
            .generate(&pool, &bag)
            .into_iter()
            .map(|combination| combination.iter().map(|w| w.text().to_string()).collect())
            .collect())
    }

    /// Statistics over the words formable from `letters`
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn word_stats(&self, letters: &str, max_words: usize) -> Result<WordStats, EngineError> {
        let Some(query) = query_bag(letters) else {
            return Ok(WordStats::default());
        };
        let index = self.index()?;
        let result = SubsetMatcher::new(&index).find(&query, max_words);
        Ok(calculate_stats(&result))
    }

    /// Dictionary membership, independent of any letter bag
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn is_known_word(&self, word: &str) -> Result<bool, EngineError> {
        if Word::new(word).is_err() {
            return Ok(false);
        }
        Ok(self.index()?.contains(word))
    }

    /// Whether a submitted word is a playable dictionary entry
    ///
    /// Same as `is_known_word`; letter availability is checked separately
    /// with `can_form_word`.
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn is_formable(&self, word: &str) -> Result<bool, EngineError> {
        self.is_known_word(word)
    }

    /// Whether `word`'s letters are all available in `letters`
    ///
    /// Does not consult the dictionary.
    ///
    /// # Examples
    /// ```
    /// use wordbag::WordEngine;
    ///
    /// assert!(WordEngine::can_form_word("TEAH", "heat"));
    /// assert!(!WordEngine::can_form_word("HEAT", "tee"));
    /// ```
    #[must_use]
    pub fn can_form_word(letters: &str, word: &str) -> bool {
        match (query_bag(letters), Word::new(word)) {
            (Some(bag), Ok(word)) => bag.can_form(word.letters()),
            _ => false,
        }
    }

    /// Whether any dictionary word can still be formed from `letters`
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn has_playable_word(&self, letters: &str) -> Result<bool, EngineError> {
        let Some(bag) = query_bag(letters) else {
            return Ok(false);
        };
        let index = self.index()?;
        Ok(SubsetMatcher::new(&index).any(&bag))
    }

    /// The first `count` dictionary words, longest first
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn sample_words(&self, count: usize) -> Result<Vec<String>, EngineError> {
        let index = self.index()?;
        Ok(index
            .sample(count)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect())
    }

    /// Number of distinct dictionary words
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the dictionary cannot be read.
    pub fn word_count(&self) -> Result<usize, EngineError> {
        Ok(self.index()?.word_count())
    }
}
