//! Engine configuration

use crate::dictionary::DEFAULT_TTL;
use crate::matcher::{DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_WORDS, DEFAULT_POOL_SIZE};
use std::path::PathBuf;
use std::time::Duration;

/// Settings for a `WordEngine`
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordbag::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_cache_ttl(Duration::from_secs(60))
///     .with_combination_pool(50);
/// assert_eq!(config.combination_pool, 50);
/// assert!(config.dictionary_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Word list on disk; `None` uses the embedded list
    pub dictionary_path: Option<PathBuf>,
    /// How long a built index stays valid
    pub cache_ttl: Duration,
    /// Default cap on formable words returned
    pub max_words: usize,
    /// Default cap on combinations returned
    pub max_combinations: usize,
    /// Ranked candidates fed into combination search
    pub combination_pool: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            cache_ttl: DEFAULT_TTL,
            max_words: DEFAULT_MAX_WORDS,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            combination_pool: DEFAULT_POOL_SIZE,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    #[must_use]
    pub const fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    #[must_use]
    pub const fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    #[must_use]
    pub const fn with_combination_pool(mut self, pool: usize) -> Self {
        self.combination_pool = pool;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.max_combinations, 20);
        assert_eq!(config.combination_pool, 100);
        assert_eq!(config.max_words, 1_000_000);
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::default()
            .with_dictionary_path("words.txt")
            .with_max_words(10)
            .with_max_combinations(3);

        assert_eq!(config.dictionary_path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.max_words, 10);
        assert_eq!(config.max_combinations, 3);
    }
}
