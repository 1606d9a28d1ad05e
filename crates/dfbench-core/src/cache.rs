//! Memoized datasets keyed by row count.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::engine::BenchError;
use crate::generator::DataGenerator;
use crate::record::Dataset;

/// Whether a dataset came from the cache or was freshly generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    #[must_use]
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

/// Explicit row-count → dataset memoization.
///
/// Least-recently-used entries are evicted once `capacity` datasets are
/// held; with the default capacity of one, asking for a new row count
/// drops the previous dataset.
pub struct DatasetCache {
    generator: DataGenerator,
    entries: Mutex<LruCache<usize, Arc<Dataset>>>,
}

impl DatasetCache {
    /// Create a cache in front of `generator`. A capacity of zero is
    /// treated as the default.
    #[must_use]
    pub fn new(generator: DataGenerator, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            generator,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    #[must_use]
    pub fn generator(&self) -> &DataGenerator {
        &self.generator
    }

    /// Return the dataset for `rows`, generating it on a miss.
    ///
    /// Generation runs without the lock held, so readers such as `len()`
    /// never wait on it. If another caller stored the same row count in the
    /// meantime, its dataset wins and the fresh one is dropped.
    pub fn get_or_generate(&self, rows: usize) -> Result<(Arc<Dataset>, CacheStatus), BenchError> {
        if let Some(dataset) = self.entries.lock().get(&rows) {
            tracing::info!(rows, "dataset cache hit");
            return Ok((Arc::clone(dataset), CacheStatus::Hit));
        }

        tracing::info!(rows, "dataset cache miss");
        let dataset = Arc::new(self.generator.generate(rows)?);

        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(&rows) {
            return Ok((Arc::clone(existing), CacheStatus::Miss));
        }
        if let Some((evicted, _)) = entries.push(rows, Arc::clone(&dataset)) {
            if evicted != rows {
                tracing::debug!(evicted, "dataset evicted");
            }
        }
        Ok((dataset, CacheStatus::Miss))
    }

    /// Whether a dataset for `rows` is currently held.
    #[must_use]
    pub fn contains(&self, rows: usize) -> bool {
        self.entries.lock().contains(&rows)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every memoized dataset.
    pub fn invalidate(&self) {
        self.entries.lock().clear();
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(DataGenerator::new(), DEFAULT_CACHE_CAPACITY)
    }
}
