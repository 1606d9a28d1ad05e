//! Pipeline stage observation.

use std::time::Duration;

use crate::cache::CacheStatus;

/// Receives stage notifications while a pipeline runs.
///
/// Implementations must be cheap; they are called on the pipeline thread.
pub trait PipelineObserver: Send + Sync {
    /// Dataset generation (or cache lookup) is starting.
    fn on_generating(&self, _rows: usize) {}

    /// Dataset is ready.
    fn on_generated(&self, _rows: usize, _elapsed: Duration, _cache: CacheStatus) {}

    /// An engine finished converting the dataset.
    fn on_engine_loaded(&self, _engine: &str, _elapsed: Duration) {}

    /// An engine finished aggregating.
    fn on_engine_finished(&self, _engine: &str, _elapsed: Duration, _groups: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PipelineObserver for NoOpObserver {}
