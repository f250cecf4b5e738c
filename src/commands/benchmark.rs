//! Benchmark command
//!
//! Times word matching and combination search over random bags.

use crate::engine::WordEngine;
use crate::error::EngineError;
use crate::generator::generate_letter_bag;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_bags: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    pub unplayable: usize,
    /// Number of matches -> number of bags, bucketed by tens
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub bags_per_second: f64,
}

/// Per-bag measurement
struct BagRun {
    matches: usize,
}

/// Run matching and combination search over `count` random bags
///
/// Bags are generated up front from `rng` and then processed in parallel.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn run_benchmark<R: Rng + ?Sized>(
    engine: &WordEngine,
    count: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, EngineError> {
    // Load outside the timed section
    engine.index()?;

    let bags: Vec<String> = (0..count).map(|_| generate_letter_bag(rng)).collect();

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let runs: Vec<BagRun> = bags
        .par_iter()
        .map(|letters| -> Result<BagRun, EngineError> {
            let words = engine.find_formable_words(letters, engine.config().max_words)?;
            engine.find_combinations(letters, engine.config().max_combinations)?;
            pb.inc(1);
            Ok(BagRun {
                matches: words.len(),
            })
        })
        .collect::<Result<_, _>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let total_matches: usize = runs.iter().map(|r| r.matches).sum();
    let mut distribution = BTreeMap::new();
    for run in &runs {
        *distribution.entry(run.matches / 10 * 10).or_insert(0) += 1;
    }

    Ok(BenchmarkResult {
        total_bags: runs.len(),
        total_matches,
        average_matches: if runs.is_empty() {
            0.0
        } else {
            total_matches as f64 / runs.len() as f64
        },
        min_matches: runs.iter().map(|r| r.matches).min().unwrap_or(0),
        max_matches: runs.iter().map(|r| r.matches).max().unwrap_or(0),
        unplayable: runs.iter().filter(|r| r.matches == 0).count(),
        distribution,
        duration,
        bags_per_second: runs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let engine = WordEngine::embedded();
        let result = run_benchmark(&engine, 10, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(result.total_bags, 10);
        assert!(result.min_matches <= result.max_matches);
        assert!(result.average_matches >= result.min_matches as f64);
        assert!(result.average_matches <= result.max_matches as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let engine = WordEngine::embedded();
        let result = run_benchmark(&engine, 10, &mut StdRng::seed_from_u64(11)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_bags);
    }

    #[test]
    fn benchmark_no_bags() {
        let engine = WordEngine::embedded();
        let result = run_benchmark(&engine, 0, &mut rand::rng()).unwrap();

        assert_eq!(result.total_bags, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.average_matches.abs() < f64::EPSILON);
    }
}
