//! Time-limited, single-flight index cache
//!
//! The cache hands out `Arc<DictionaryIndex>` snapshots. A new index is fully
//! built before it is published, so readers only ever see a complete index.
//! Rebuilds are serialized: callers that miss while another rebuild is in
//! flight wait for it and reuse its result instead of re-reading the source.
//! A failed build is not remembered; the next call tries again.

use super::index::DictionaryIndex;
use super::source::WordSource;
use crate::error::EngineError;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Default time an index stays valid
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct Published {
    index: Arc<DictionaryIndex>,
    built_at: Instant,
}

#[derive(Default)]
struct Slot {
    entry: Option<Published>,
    /// Bumped on every successful publish
    generation: u64,
}

/// Lazily built, expiring cache for one dictionary source
pub struct IndexCache {
    source: Box<dyn WordSource>,
    ttl: Duration,
    slot: RwLock<Slot>,
    rebuild: Mutex<()>,
}

impl IndexCache {
    pub fn new(source: impl WordSource + 'static, ttl: Duration) -> Self {
        Self::from_boxed(Box::new(source), ttl)
    }

    #[must_use]
    pub fn from_boxed(source: Box<dyn WordSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(Slot::default()),
            rebuild: Mutex::new(()),
        }
    }

    /// The current index, building it if missing or expired
    ///
    /// # Errors
    /// Returns `EngineError::DataUnavailable` if a rebuild was needed and the
    /// source could not be read.
    pub fn get(&self) -> Result<Arc<DictionaryIndex>, EngineError> {
        let seen = match self.lookup() {
            Ok(index) => return Ok(index),
            Err(generation) => generation,
        };

        let _guard = self.rebuild.lock().unwrap_or_else(PoisonError::into_inner);

        {
            // Someone may have published while we waited for the lock
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(published) = &slot.entry {
                if slot.generation != seen || self.is_fresh(published) {
                    log::debug!("reusing index built by a concurrent caller");
                    return Ok(Arc::clone(&published.index));
                }
            }
        }

        let index = match DictionaryIndex::load(self.source.as_ref()) {
            Ok(index) => Arc::new(index),
            Err(e) => {
                log::warn!("dictionary build failed: {e}");
                return Err(e);
            }
        };

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.entry = Some(Published {
            index: Arc::clone(&index),
            built_at: Instant::now(),
        });
        slot.generation += 1;

        Ok(index)
    }

    /// Drop the cached index; the next `get` rebuilds it
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.entry.take().is_some() {
            log::debug!("dictionary index invalidated");
        }
    }

    /// True if a non-expired index is currently published
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.lookup().is_ok()
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub fn source_name(&self) -> String {
        self.source.name()
    }

    /// Fresh index, or the generation observed on a miss
    fn lookup(&self) -> Result<Arc<DictionaryIndex>, u64> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match &slot.entry {
            Some(published) if self.is_fresh(published) => Ok(Arc::clone(&published.index)),
            Some(_) => {
                log::debug!("dictionary index expired");
                Err(slot.generation)
            }
            None => Err(slot.generation),
        }
    }

    fn is_fresh(&self, published: &Published) -> bool {
        published.built_at.elapsed() < self.ttl
    }
}
