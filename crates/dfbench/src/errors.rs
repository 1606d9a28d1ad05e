//! Error handling and exit codes.

use dfbench_core::constants::exit_codes;
use dfbench_core::engine::BenchError;

/// Exit code for a pipeline error.
#[must_use]
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::InvalidRowCount { .. } | BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        BenchError::Engine { .. } | BenchError::Aggregation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any top-level error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
