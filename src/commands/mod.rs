//! Command implementations

pub mod benchmark;
pub mod check;
pub mod combos;
pub mod generate;
pub mod words;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use combos::{CombosResult, find_combos};
pub use generate::{GeneratedBag, generate_bags};
pub use words::{StatsResult, WordsResult, analyze_letters, find_words};
