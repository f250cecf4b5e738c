//! Display functions for command results

use super::formatters::{columns, create_progress_bar, format_combination};
use crate::commands::{
    BenchmarkResult, CheckResult, CombosResult, GeneratedBag, StatsResult, WordsResult,
};
use colored::Colorize;

/// Print the formable words for a bag
pub fn print_words_result(result: &WordsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", result.letters.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be formed.".red());
        return;
    }

    let mut current_len = 0;
    let mut group: Vec<String> = Vec::new();
    for word in &result.words {
        if word.len() != current_len && !group.is_empty() {
            print_group(current_len, &group);
            group.clear();
        }
        current_len = word.len();
        group.push(word.clone());
    }
    print_group(current_len, &group);

    println!(
        "\n{} words in {:.2}ms",
        result.words.len().to_string().green().bold(),
        result.duration.as_secs_f64() * 1000.0
    );
}

fn print_group(length: usize, words: &[String]) {
    println!("\n{}", format!("{length} letters").bright_cyan().bold());
    for row in columns(words, 6) {
        println!("  {row}");
    }
}

/// Print ranked combinations
pub fn print_combos_result(result: &CombosResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Combinations for {}", result.letters.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.combinations.is_empty() {
        println!("\n{}", "No combinations found.".red());
        return;
    }

    println!();
    for (i, combination) in result.combinations.iter().enumerate() {
        println!(
            "  {:>2}. {}",
            (i + 1).to_string().bright_black(),
            format_combination(combination)
        );
    }
    println!(
        "\n{} combinations in {:.2}ms",
        result.combinations.len().to_string().green().bold(),
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print statistics with a length histogram
pub fn print_stats_result(result: &StatsResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD STATISTICS:".bright_cyan().bold(),
        result.letters.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Total words:    {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "   Longest word:   {}",
        stats.longest_word.as_deref().unwrap_or("-").to_uppercase().green()
    );
    println!(
        "   Shortest word:  {}",
        stats.shortest_word.as_deref().unwrap_or("-").to_uppercase()
    );
    println!(
        "   Average length: {}",
        format!("{:.2}", stats.average_length).bright_yellow()
    );

    println!("\n📈 {}", "Length distribution:".bright_cyan().bold());
    let max_count = stats.length_histogram.values().copied().max().unwrap_or(0);
    for (&length, &count) in &stats.length_histogram {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("   {length:>2}: {} {count:5}", bar.green());
    }
}

/// Print dictionary membership for a word
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();
    if result.known {
        println!("✅ {} is in the dictionary", word.green().bold());
    } else {
        println!("❌ {} is not in the dictionary", word.red().bold());
    }

    match result.fits {
        Some(true) => println!("   and can be formed from the given letters"),
        Some(false) => println!("   but cannot be formed from the given letters"),
        None => {}
    }
}

/// Print generated bags with their best words
pub fn print_generated_bags(bags: &[GeneratedBag]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED BAGS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for bag in bags {
        let status = if bag.is_playable() {
            format!("{} words", bag.total_words).green()
        } else {
            "unplayable".red()
        };
        println!("\n  {}  {status}", bag.letters.bright_yellow().bold());
        if !bag.best_words.is_empty() {
            println!("     best: {}", bag.best_words.join(", ").to_uppercase());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Bags tested:      {}", result.total_bags);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).yellow()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).green()
    );
    println!("   Unplayable bags:  {}", result.unplayable);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Bags/second:      {:.1}", result.bags_per_second);

    if result.total_bags == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&bucket, &count) in &result.distribution {
        let pct = (count as f64 / result.total_bags as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}-{:<4} {} {count:4} ({pct:5.1}%)",
            bucket,
            bucket + 9,
            bar.green()
        );
    }
}
