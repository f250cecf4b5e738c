//! Core domain types for letter-bag matching
//!
//! This module contains the fundamental value types with no I/O.
//! All types here are pure, testable, and cheap to copy or clone.

mod letters;
mod word;

pub use letters::{ALPHABET_SIZE, LetterMultiset};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
