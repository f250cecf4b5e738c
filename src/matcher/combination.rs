//! Combination search
//!
//! Builds sequences of words that can all be played from the same bag,
//! each word consuming its letters before the next is chosen. The search is
//! a depth-first backtrack over a ranked candidate pool and is exponential
//! in the worst case, so both the pool and the number of results are capped.

use crate::core::{LetterMultiset, Word};
use std::cmp::Reverse;

/// A sequence of words whose combined letters fit in the bag
pub type Combination<'a> = Vec<&'a Word>;

/// Default number of combinations returned
pub const DEFAULT_MAX_COMBINATIONS: usize = 20;

/// Default number of ranked candidates used as building blocks
pub const DEFAULT_POOL_SIZE: usize = 100;

/// Total letters used by a combination (its ranking score)
#[must_use]
pub fn combination_score(combination: &[&Word]) -> usize {
    combination.iter().map(|w| w.len()).sum()
}

/// Bounded depth-first combination search
#[derive(Debug, Clone, Copy)]
pub struct CombinationGenerator {
    max_combinations: usize,
    pool_size: usize,
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COMBINATIONS, DEFAULT_POOL_SIZE)
    }
}

impl CombinationGenerator {
    #[must_use]
    pub const fn new(max_combinations: usize, pool_size: usize) -> Self {
        Self {
            max_combinations,
            pool_size,
        }
    }

    /// Override the result cap
    #[must_use]
    pub const fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    #[must_use]
    pub const fn max_combinations(&self) -> usize {
        self.max_combinations
    }

    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Enumerate combinations drawn from `pool` that fit in `bag`
    ///
    /// Only the first `pool_size` words of the (ranked) pool are used. Each
    /// word may follow itself or any later pool word, so a combination is
    /// never a reordering of another. Both partial and extended sequences
    /// are recorded. The result is ordered by total letters used, longest
    /// first; equal scores keep discovery order.
    #[must_use]
    pub fn generate<'a>(&self, pool: &[&'a Word], bag: &LetterMultiset) -> Vec<Combination<'a>> {
        if self.max_combinations == 0 || bag.is_empty() {
            return Vec::new();
        }

        let pool = &pool[..pool.len().min(self.pool_size)];
        let mut found = Vec::new();
        self.search(pool, 0, *bag, &[], &mut found);

        if found.len() >= self.max_combinations {
            log::debug!(
                "combination cap of {} reached (pool of {})",
                self.max_combinations,
                pool.len()
            );
        }

        found.sort_by_key(|combination| Reverse(combination_score(combination)));
        found
    }

    fn search<'a>(
        &self,
        pool: &[&'a Word],
        start: usize,
        remaining: LetterMultiset,
        current: &[&'a Word],
        found: &mut Vec<Combination<'a>>,
    ) {
        for (offset, &word) in pool[start..].iter().enumerate() {
            if found.len() >= self.max_combinations {
                return;
            }
            // Overdrawing the bag means the word does not fit
            let Ok(next) = remaining.subtract(word.letters()) else {
                continue;
            };

            let mut sequence = current.to_vec();
            sequence.push(word);
            found.push(sequence.clone());

            self.search(pool, start + offset, next, &sequence, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;
    use crate::dictionary::loader::words_from_slice;
    use crate::matcher::{DEFAULT_MAX_WORDS, SubsetMatcher};

    fn texts(combinations: &[Combination<'_>]) -> Vec<Vec<String>> {
        combinations
            .iter()
            .map(|c| c.iter().map(|w| w.text().to_string()).collect())
            .collect()
    }

    fn run(words: &[&str], letters: &str, generator: CombinationGenerator) -> Vec<Vec<String>> {
        let index = DictionaryIndex::build(words_from_slice(words));
        let bag = LetterMultiset::from_str(letters);
        let pool = SubsetMatcher::new(&index).find(&bag, DEFAULT_MAX_WORDS);
        texts(&generator.generate(&pool, &bag))
    }

    #[test]
    fn heat_combinations_in_rank_order() {
        let result = run(
            &["heat", "eat", "he", "at"],
            "HEAT",
            CombinationGenerator::default(),
        );

        assert_eq!(
            result,
            vec![
                vec!["heat"],
                vec!["at", "he"],
                vec!["eat"],
                vec!["at"],
                vec!["he"],
            ]
        );
        assert!(!result.contains(&vec!["he".to_string(), "at".to_string()]));
    }

    #[test]
    fn cap_is_a_hard_stop() {
        let generator = CombinationGenerator::new(2, DEFAULT_POOL_SIZE);
        let result = run(&["heat", "eat", "he", "at"], "heat", generator);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn pool_size_limits_building_blocks() {
        let generator = CombinationGenerator::new(DEFAULT_MAX_COMBINATIONS, 1);
        let result = run(&["heat", "eat", "he", "at"], "heat", generator);
        assert_eq!(result, vec![vec!["heat"]]);
    }

    #[test]
    fn repeated_words_need_repeated_letters() {
        let result = run(&["at"], "atat", CombinationGenerator::default());
        assert_eq!(result, vec![vec!["at", "at"], vec!["at"]]);

        let result = run(&["at"], "att", CombinationGenerator::default());
        assert_eq!(result, vec![vec!["at"]]);
    }

    #[test]
    fn every_combination_fits_the_bag() {
        let index = DictionaryIndex::load(&crate::dictionary::StaticSource::embedded()).unwrap();
        let bag = LetterMultiset::from_str("heatstarmindfire");
        let pool = SubsetMatcher::new(&index).find(&bag, DEFAULT_MAX_WORDS);
        let combinations = CombinationGenerator::default().generate(&pool, &bag);

        assert!(!combinations.is_empty());
        assert!(combinations.len() <= DEFAULT_MAX_COMBINATIONS);
        for combination in &combinations {
            let used = combination
                .iter()
                .fold(LetterMultiset::new(), |acc, w| acc.union(w.letters()));
            assert!(bag.can_form(&used), "{combination:?} overdraws the bag");
        }
        assert!(
            combinations
                .windows(2)
                .all(|pair| combination_score(&pair[0]) >= combination_score(&pair[1]))
        );
    }

    #[test]
    fn empty_inputs_give_no_combinations() {
        assert!(run(&["at"], "", CombinationGenerator::default()).is_empty());
        assert!(run(&[], "heat", CombinationGenerator::default()).is_empty());
        assert!(run(&["at"], "at", CombinationGenerator::new(0, 10)).is_empty());
    }
}
