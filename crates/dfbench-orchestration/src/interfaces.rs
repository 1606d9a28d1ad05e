//! Orchestration interfaces.

use std::time::Duration;

use dfbench_core::aggregate::AggregateResult;
use dfbench_core::cache::CacheStatus;

/// Trait for presenting pipeline results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the dataset generation status.
    fn present_generation(&self, generation: &GenerationReport);

    /// Present the engine results side by side.
    fn present_runs(&self, runs: &[EngineRun]);

    /// Present the cross-engine agreement verdict.
    fn present_agreement(&self, agreement: &Agreement);

    /// Present an error.
    fn present_error(&self, error: &str);

    /// Present a whole report in display order.
    fn present_report(&self, report: &PipelineReport) {
        self.present_generation(&report.generation);
        self.present_runs(&report.runs);
        self.present_agreement(&report.agreement);
    }
}

/// Outcome of dataset generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of records.
    pub rows: usize,
    /// Time spent generating or fetching from the cache.
    pub elapsed: Duration,
    /// Whether the dataset was memoized.
    pub cache: CacheStatus,
}

/// Result of a single engine.
#[derive(Debug, Clone)]
pub struct EngineRun {
    /// Engine name.
    pub engine: String,
    /// Engine display label.
    pub label: String,
    /// Rows held by the engine's table.
    pub rows: usize,
    /// Time spent converting the dataset.
    pub load_duration: Duration,
    /// Time spent grouping and averaging.
    pub duration: Duration,
    /// The grouped means.
    pub result: AggregateResult,
}

/// Cross-engine comparison verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Agreement {
    /// All engines produced the same keys and means within tolerance.
    Verified,
    /// At least one engine disagreed.
    Mismatch(String),
    /// Fewer than two engines ran, or verification was disabled.
    NotChecked,
}

impl Agreement {
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch(_))
    }
}

/// Everything one pipeline pass produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub generation: GenerationReport,
    pub runs: Vec<EngineRun>,
    pub agreement: Agreement,
}

impl PipelineReport {
    /// Duration of the slowest engine aggregation.
    #[must_use]
    pub fn slowest(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
