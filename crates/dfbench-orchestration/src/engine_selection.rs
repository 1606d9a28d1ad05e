//! Engine selection logic.

use std::sync::Arc;

use dfbench_core::engine::{BenchError, Engine};
use dfbench_core::registry::EngineFactory;

/// Get engines to run based on the `--engine` selection.
///
/// `all` runs every registered engine in display order; a comma-separated
/// list runs those engines in the given order.
pub fn get_engines_to_run(
    selection: &str,
    factory: &dyn EngineFactory,
) -> Result<Vec<Arc<dyn Engine>>, BenchError> {
    match selection.trim() {
        "all" => factory.available().into_iter().map(|name| factory.get(name)).collect(),
        "" => Err(BenchError::Config("no engine selected".into())),
        list => list
            .split(',')
            .map(|name| factory.get(name.trim()))
            .collect(),
    }
}
