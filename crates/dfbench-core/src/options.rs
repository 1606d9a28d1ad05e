//! Engine options.

use crate::constants::DEFAULT_PARTITIONS;

/// Options passed to every engine when it loads a dataset.
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of chunks for the partitioned engine.
    pub partitions: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            partitions: DEFAULT_PARTITIONS,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.partitions == 0 {
            self.partitions = DEFAULT_PARTITIONS;
        }
        self
    }
}
