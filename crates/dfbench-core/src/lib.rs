//! # dfbench-core
//!
//! Core library for dfbench: synthetic dataset generation with a
//! row-count keyed cache, and three engines that compute the mean salary
//! grouped by the first letter of each name.

pub mod aggregate;
pub mod arrow_engine;
pub mod cache;
pub mod constants;
pub mod engine;
pub mod faker;
pub mod frame;
pub mod generator;
pub mod observer;
pub mod options;
pub mod partitioned;
pub mod record;
pub mod registry;

// Re-exports
pub use aggregate::{AggregateResult, GroupMean, Precision};
pub use cache::{CacheStatus, DatasetCache};
pub use constants::{
    exit_codes, DEFAULT_PARTITIONS, DEFAULT_PREVIEW_ROWS, DEFAULT_ROWS, MAX_ROWS, MIN_ROWS,
    ROW_STEP,
};
pub use engine::{BenchError, Engine, LoadedTable};
pub use generator::DataGenerator;
pub use observer::{NoOpObserver, PipelineObserver};
pub use options::Options;
pub use record::{Dataset, Record};
pub use registry::{DefaultFactory, EngineFactory};

/// Mean salary by first letter of `dataset`, computed with the frame engine.
///
/// A convenience for simple use cases; orchestration goes through the
/// `Engine` trait to time loading and aggregation separately.
///
/// # Example
/// ```
/// use dfbench_core::{mean_salary_by_first_letter, Dataset, Record};
///
/// let ds = Dataset::from_records(vec![Record {
///     name: "Ada Lovelace".into(),
///     email: "ada@example.com".into(),
///     address: "1 Analytical Way".into(),
///     age: 36,
///     salary: 90_000,
/// }]);
/// assert_eq!(mean_salary_by_first_letter(&ds).get('A'), Some(90_000.0));
/// ```
#[must_use]
pub fn mean_salary_by_first_letter(dataset: &Dataset) -> AggregateResult {
    frame::Frame::from_records(dataset.records())
        .group_sums()
        .into_result()
}
