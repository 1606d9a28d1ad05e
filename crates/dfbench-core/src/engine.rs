//! Engine traits and the shared error type.
//!
//! `Engine` is the public trait consumed by orchestration: it converts a
//! `Dataset` into the engine's own representation. `LoadedTable` is that
//! representation, which computes the grouped mean on demand.

use crate::aggregate::AggregateResult;
use crate::options::Options;
use crate::record::Dataset;

/// Error type for generation, engines, and cross-engine comparison.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Requested row count is outside the accepted range.
    #[error("row count {rows} outside {min}..={max}")]
    InvalidRowCount { rows: usize, min: usize, max: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An engine failed while loading or aggregating.
    #[error("{engine} engine failed: {message}")]
    Engine { engine: String, message: String },

    /// Aggregation could not produce a result.
    #[error("aggregation error: {0}")]
    Aggregation(String),

    /// Results from different engines don't agree.
    #[error("result mismatch for {engine}: {detail}")]
    Mismatch { engine: String, detail: String },
}

impl BenchError {
    /// Wrap an underlying engine failure.
    pub fn engine(engine: &str, err: impl std::fmt::Display) -> Self {
        Self::Engine {
            engine: engine.to_string(),
            message: err.to_string(),
        }
    }
}

/// Public trait for group-by engines, consumed by orchestration.
pub trait Engine: Send + Sync {
    /// Short identifier used on the command line.
    fn name(&self) -> &str;

    /// Human-readable label for result panels.
    fn label(&self) -> &str;

    /// Convert a dataset into this engine's representation.
    fn load(&self, dataset: &Dataset, opts: &Options) -> Result<Box<dyn LoadedTable>, BenchError>;
}

/// A dataset converted into one engine's representation.
pub trait LoadedTable: Send + Sync {
    /// Number of rows held.
    fn rows(&self) -> usize;

    /// Mean salary for each distinct first character of `name`.
    fn mean_salary_by_first_letter(&self) -> Result<AggregateResult, BenchError>;
}
