//! Dictionary loading, indexing and caching
//!
//! Raw word lists become a length-partitioned `DictionaryIndex`, kept in an
//! expiring `IndexCache` that rebuilds from its `WordSource` on demand.

pub mod cache;
mod embedded;
pub mod index;
pub mod loader;
pub mod source;

pub use cache::{DEFAULT_TTL, IndexCache};
pub use embedded::{WORDS, WORDS_COUNT};
pub use index::{DictionaryIndex, LengthBucket};
pub use source::{FileSource, MemorySource, StaticSource, WordSource};
