//! Wordbag - CLI
//!
//! Find the words, combinations and statistics for a bag of letters.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordbag::{
    EngineConfig, WordEngine,
    commands::{analyze_letters, check_word, find_combos, find_words, generate_bags, run_benchmark},
    logging::init_logger,
    output::{
        print_benchmark_result, print_check_result, print_combos_result, print_generated_bags,
        print_stats_result, print_words_result,
    },
};

#[derive(Parser)]
#[command(
    name = "wordbag",
    about = "Find every dictionary word, and word combination, a bag of letters can form",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true, env = "WORDBAG_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Ranked words used as building blocks for combinations
    #[arg(long, global = true, default_value = "100")]
    pool: usize,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words a bag of letters can form
    Words {
        /// The available letters
        letters: String,

        /// Maximum number of words to list
        #[arg(short = 'n', long, default_value = "1000000")]
        max: usize,
    },

    /// Find combinations of words that fit in the bag together
    Combos {
        /// The available letters
        letters: String,

        /// Maximum number of combinations
        #[arg(short = 'n', long, default_value = "20")]
        max: usize,
    },

    /// Show statistics for the words a bag can form
    Stats {
        /// The available letters
        letters: String,
    },

    /// Check whether a word is in the dictionary
    Check {
        /// Word to check
        word: String,

        /// Also check the word against these letters
        #[arg(short, long)]
        letters: Option<String>,
    },

    /// Generate random letter bags
    Generate {
        /// Number of bags
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Benchmark matching over random bags
    Benchmark {
        /// Number of random bags to test
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let mut config = EngineConfig::default().with_combination_pool(cli.pool);
    if let Some(path) = cli.dictionary {
        config = config.with_dictionary_path(path);
    }
    let engine = WordEngine::new(config);
    log::debug!("using dictionary {}", engine.source_name());

    match cli.command {
        Commands::Words { letters, max } => {
            print_words_result(&find_words(&engine, &letters, max)?);
        }
        Commands::Combos { letters, max } => {
            print_combos_result(&find_combos(&engine, &letters, max)?);
        }
        Commands::Stats { letters } => {
            print_stats_result(&analyze_letters(&engine, &letters)?);
        }
        Commands::Check { word, letters } => {
            print_check_result(&check_word(&engine, &word, letters.as_deref())?);
        }
        Commands::Generate { count } => {
            print_generated_bags(&generate_bags(&engine, count, &mut rand::rng())?);
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random bags...");
            print_benchmark_result(&run_benchmark(&engine, count, &mut rand::rng())?);
        }
    }

    Ok(())
}
