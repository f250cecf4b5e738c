//! Wordbag
//!
//! A letter-bag word matching engine: finds every dictionary word that can be
//! built from a bag of letters, chains words into combinations that share
//! one bag, and summarizes the results.
//!
//! # Quick Start
//!
//! ```rust
//! use wordbag::WordEngine;
//!
//! let engine = WordEngine::embedded();
//!
//! let words = engine.find_formable_words("HEATSTAR", 20).unwrap();
//! assert!(words.contains(&"heat".to_string()));
//!
//! let combos = engine.find_combinations("HEATSTAR", 5).unwrap();
//! assert!(combos.len() <= 5);
//! ```

// Core domain types
pub mod core;

// Dictionary loading, indexing and caching
pub mod dictionary;

// Matching algorithms
pub mod matcher;

// Engine facade
pub mod engine;

// Ambient configuration, errors and logging
pub mod config;
pub mod error;
pub mod logging;

// Random letter bags
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::EngineConfig;
pub use engine::WordEngine;
pub use error::EngineError;
