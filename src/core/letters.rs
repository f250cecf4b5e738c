//! Letter multiset (bag of letters)
//!
//! A `LetterMultiset` counts occurrences of the 26 ASCII letters. It is the
//! shared currency of every matching operation: queries, dictionary words and
//! the remaining bag during combination search are all multisets.

use crate::error::EngineError;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A case-insensitive bag of letters with per-letter counts
///
/// Non-alphabetic characters are ignored when building a bag. A letter with
/// count 0 is absent, so equality and hashing depend only on content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET_SIZE],
}

/// Map an ASCII letter of either case to its alphabet index
#[inline]
const fn letter_index(byte: u8) -> Option<usize> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as usize),
        b'A'..=b'Z' => Some((byte - b'A') as usize),
        _ => None,
    }
}

#[inline]
const fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

impl LetterMultiset {
    /// Create an empty bag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Count the letters of a string
    ///
    /// Case is normalized; anything that is not an ASCII letter is skipped.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::LetterMultiset;
    ///
    /// let bag = LetterMultiset::from_str("HeAt");
    /// assert_eq!(bag.count('h'), 1);
    /// assert_eq!(bag.count('E'), 1);
    /// assert_eq!(bag.len(), 4);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Infallible, unlike `FromStr`
    pub fn from_str(text: &str) -> Self {
        let mut bag = Self::new();
        for index in text.bytes().filter_map(letter_index) {
            bag.counts[index] = bag.counts[index].saturating_add(1);
        }
        bag
    }

    /// Count of a letter (case-insensitive); 0 for non-letters
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .map_or(0, |index| self.counts[index])
    }

    /// Total number of letters, counting multiplicity
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// True when no letter is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Bit set of the letters present (bit `i` = letter `'a' + i`)
    ///
    /// Used as the cheap "shares any letter" pre-filter.
    #[inline]
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Iterate over present letters and their counts, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (index_letter(i), c))
    }

    /// True iff `other` can be assembled from this bag
    ///
    /// Every letter count in `other` must be at most the count here.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::LetterMultiset;
    ///
    /// let bag = LetterMultiset::from_str("heat");
    /// assert!(bag.can_form(&LetterMultiset::from_str("eat")));
    /// assert!(!bag.can_form(&LetterMultiset::from_str("tee")));
    /// ```
    #[inline]
    #[must_use]
    pub fn can_form(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(&have, &need)| need <= have)
    }

    /// Remove `other`'s letters, returning a new bag
    ///
    /// The receiver is never modified.
    ///
    /// # Errors
    /// Returns `EngineError::PreconditionViolated` if `other` needs more of a
    /// letter than this bag holds; callers are expected to check `can_form`
    /// first.
    pub fn subtract(&self, other: &Self) -> Result<Self, EngineError> {
        let mut counts = self.counts;
        for (i, (slot, &need)) in counts.iter_mut().zip(other.counts.iter()).enumerate() {
            if need > *slot {
                return Err(EngineError::PreconditionViolated {
                    letter: index_letter(i),
                    needed: need,
                    available: *slot,
                });
            }
            *slot -= need;
        }
        Ok(Self { counts })
    }

    /// Add `other`'s letters, returning a new bag
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (slot, &extra) in counts.iter_mut().zip(other.counts.iter()) {
            *slot = slot.saturating_add(extra);
        }
        Self { counts }
    }
}

impl fmt::Display for LetterMultiset {
    /// Letters in alphabetical order, repeated by count
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.iter() {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
