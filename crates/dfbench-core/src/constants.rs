//! Constants for dataset bounds, engine defaults, and comparison tolerances.

/// Smallest dataset the generator accepts.
pub const MIN_ROWS: usize = 100;

/// Largest dataset the generator accepts.
pub const MAX_ROWS: usize = 1_000_000;

/// Row count used when none is configured.
pub const DEFAULT_ROWS: usize = 100_000;

/// Increment of the interactive row-count control.
pub const ROW_STEP: usize = 10_000;

/// Inclusive age range of generated records.
pub const AGE_RANGE: (i64, i64) = (18, 80);

/// Inclusive salary range of generated records.
pub const SALARY_RANGE: (i64, i64) = (30_000, 120_000);

/// Number of chunks the partitioned engine splits a table into.
pub const DEFAULT_PARTITIONS: usize = 4;

/// Number of groups shown in a result preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Number of datasets the cache keeps. One entry means a new row count
/// evicts the previous dataset.
pub const DEFAULT_CACHE_CAPACITY: usize = 1;

/// Relative tolerance between two double-precision means.
pub const DOUBLE_TOLERANCE: f64 = 1e-6;

/// Relative tolerance when either side was averaged in single precision.
pub const SINGLE_TOLERANCE: f64 = 1e-3;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Engine results did not agree during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
