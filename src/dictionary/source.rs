//! Dictionary sources
//!
//! A `WordSource` is whatever backs the dictionary: a file on disk, the
//! embedded list, or words held in memory. The index cache re-reads its
//! source each time the cached index expires.

use super::embedded::WORDS;
use super::loader::{load_from_file, parse_lines, words_from_slice};
use crate::core::Word;
use crate::error::EngineError;
use std::path::PathBuf;

/// Backing store for the dictionary
pub trait WordSource: Send + Sync {
    /// Human-readable name used in logs and errors
    fn name(&self) -> String;

    /// Read and validate every word in the source
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if the source cannot be read.
    fn load(&self) -> Result<Vec<Word>, EngineError>;
}

/// Newline-delimited word list on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Word>, EngineError> {
        load_from_file(&self.path).map_err(|e| EngineError::unavailable(self.name(), e))
    }
}

/// A static list of raw entries, such as the embedded dictionary
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    words: &'static [&'static str],
}

impl StaticSource {
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(WORDS)
    }
}

impl WordSource for StaticSource {
    fn name(&self) -> String {
        format!("embedded ({} entries)", self.words.len())
    }

    fn load(&self) -> Result<Vec<Word>, EngineError> {
        Ok(words_from_slice(self.words))
    }
}

/// Raw entries owned in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for MemorySource {
    fn name(&self) -> String {
        format!("memory ({} entries)", self.lines.len())
    }

    fn load(&self) -> Result<Vec<Word>, EngineError> {
        Ok(parse_lines(self.lines.iter().map(String::as_str)).0)
    }
}
