//! Engine error types

use std::io;

/// Errors surfaced by the matching engine
///
/// Bad query strings never produce an error; they normalize to empty results.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dictionary source could not be read
    #[error("dictionary unavailable ({source_name}): {cause}")]
    DataUnavailable {
        source_name: String,
        #[source]
        cause: io::Error,
    },

    /// A bag was asked to give up letters it does not hold
    #[error("cannot remove {needed} x '{letter}' from a bag holding {available}")]
    PreconditionViolated {
        letter: char,
        needed: u32,
        available: u32,
    },
}

impl EngineError {
    /// Build a `DataUnavailable` error for a named source
    pub fn unavailable(source_name: impl Into<String>, cause: io::Error) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            cause,
        }
    }
}
