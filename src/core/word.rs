//! Dictionary word representation
//!
//! A `Word` is a validated dictionary entry: 1-14 lowercase ASCII letters,
//! stored together with its letter multiset so matching never recounts it.

use super::LetterMultiset;
use std::fmt;

/// Longest word the dictionary accepts
pub const MAX_WORD_LENGTH: usize = 14;

/// A validated dictionary word with precomputed letter counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterMultiset,
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word is empty")]
    Empty,
    #[error("Word must be at most 14 letters, got {0}")]
    TooLong(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - It contains anything other than ASCII letters
    /// - It is longer than 14 letters
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::Word;
    ///
    /// let word = Word::new("  Heat ").unwrap();
    /// assert_eq!(word.text(), "heat");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("h3at").is_err());
    /// assert!(Word::new("incomprehensible").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        // All bytes are ASCII here, so byte length == letter count
        if trimmed.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(trimmed.len()));
        }

        let text = trimmed.to_ascii_lowercase();
        let letters = LetterMultiset::from_str(&text);
        let mask = letters.letter_mask();

        Ok(Self {
            text,
            letters,
            mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The word's letter counts
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Bit set of letters used by the word
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.mask
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
