//! Letter-bag matching algorithms
//!
//! This module contains the subset matcher, the combination search built on
//! top of it, and statistics over match results.

pub mod combination;
pub mod stats;
pub mod subset;

pub use combination::{
    Combination, CombinationGenerator, DEFAULT_MAX_COMBINATIONS, DEFAULT_POOL_SIZE,
    combination_score,
};
pub use stats::{WordStats, calculate_stats};
pub use subset::{DEFAULT_MAX_WORDS, MatchResult, SubsetMatcher, query_bag, rank_order};
