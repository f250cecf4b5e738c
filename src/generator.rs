//! Random letter-bag generation
//!
//! Produces puzzle bags biased toward playable letters: a few guaranteed
//! vowels topped up from the most common English letters, then shuffled.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Letters in a generated bag
pub const BAG_LENGTH: usize = 14;

/// Vowels guaranteed in every bag
pub const GUARANTEED_VOWELS: usize = 3;

const VOWELS: &[u8] = b"AEIOU";
const COMMON_LETTERS: &[u8] = b"ETAOINSHRDLUCMFWY";

/// Generate an uppercase bag of `BAG_LENGTH` letters
///
/// # Examples
/// ```
/// use wordbag::generator::{BAG_LENGTH, generate_letter_bag};
///
/// let bag = generate_letter_bag(&mut rand::rng());
/// assert_eq!(bag.len(), BAG_LENGTH);
/// assert!(bag.chars().all(|c| c.is_ascii_uppercase()));
/// ```
pub fn generate_letter_bag<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut letters: Vec<u8> = Vec::with_capacity(BAG_LENGTH);

    letters.extend((0..GUARANTEED_VOWELS).filter_map(|_| VOWELS.choose(rng).copied()));
    letters.extend(
        (GUARANTEED_VOWELS..BAG_LENGTH).filter_map(|_| COMMON_LETTERS.choose(rng).copied()),
    );
    letters.shuffle(rng);

    letters.into_iter().map(char::from).collect()
}
