//! Core orchestration: sequential pipeline execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use dfbench_core::aggregate::within_tolerance;
use dfbench_core::cache::DatasetCache;
use dfbench_core::engine::{BenchError, Engine};
use dfbench_core::observer::PipelineObserver;
use dfbench_core::options::Options;
use dfbench_core::record::Dataset;

use crate::interfaces::{Agreement, EngineRun, GenerationReport, PipelineReport};

/// Run one full pass: fetch or generate the dataset, convert it for every
/// engine, then aggregate on each engine in turn.
///
/// Any failure aborts the pass; no partial report is returned.
pub fn run_pipeline(
    cache: &DatasetCache,
    engines: &[Arc<dyn Engine>],
    rows: usize,
    opts: &Options,
    verify: bool,
    observer: &dyn PipelineObserver,
) -> Result<PipelineReport, BenchError> {
    observer.on_generating(rows);
    let start = Instant::now();
    let (dataset, cache_status) = cache.get_or_generate(rows)?;
    let generation = GenerationReport {
        rows: dataset.len(),
        elapsed: start.elapsed(),
        cache: cache_status,
    };
    observer.on_generated(generation.rows, generation.elapsed, generation.cache);

    let runs = execute_engines(engines, &dataset, opts, observer)?;

    let agreement = if verify && runs.len() > 1 {
        match analyze_comparison_results(&runs) {
            Ok(()) => Agreement::Verified,
            Err(e) => {
                tracing::warn!("{e}");
                Agreement::Mismatch(e.to_string())
            }
        }
    } else {
        Agreement::NotChecked
    };

    Ok(PipelineReport {
        generation,
        runs,
        agreement,
    })
}

/// Convert `dataset` for every engine, then aggregate with each, timing both stages.
pub fn execute_engines(
    engines: &[Arc<dyn Engine>],
    dataset: &Dataset,
    opts: &Options,
    observer: &dyn PipelineObserver,
) -> Result<Vec<EngineRun>, BenchError> {
    let mut loaded = Vec::with_capacity(engines.len());
    for engine in engines {
        let start = Instant::now();
        let table = engine.load(dataset, opts)?;
        let load_duration = start.elapsed();
        tracing::debug!(engine = engine.name(), ?load_duration, "table loaded");
        observer.on_engine_loaded(engine.name(), load_duration);
        loaded.push((engine, table, load_duration));
    }

    let mut runs = Vec::with_capacity(loaded.len());
    for (engine, table, load_duration) in loaded {
        let start = Instant::now();
        let result = table.mean_salary_by_first_letter()?;
        let duration = start.elapsed();
        tracing::info!(
            engine = engine.name(),
            groups = result.len(),
            ?duration,
            "aggregation complete"
        );
        observer.on_engine_finished(engine.name(), duration, result.len());
        runs.push(EngineRun {
            engine: engine.name().to_string(),
            label: engine.label().to_string(),
            rows: table.rows(),
            load_duration,
            duration,
            result,
        });
    }
    Ok(runs)
}

/// Check that every engine produced the same keys as the first one and
/// means within the looser tolerance of the two precisions.
pub fn analyze_comparison_results(runs: &[EngineRun]) -> Result<(), BenchError> {
    let Some((first, rest)) = runs.split_first() else {
        return Err(BenchError::Aggregation("no engine results".into()));
    };

    let reference = &first.result;
    let reference_keys = reference.keys();
    for run in rest {
        let keys = run.result.keys();
        if keys != reference_keys {
            let missing: String = reference_keys.difference(&keys).collect();
            let extra: String = keys.difference(&reference_keys).collect();
            return Err(BenchError::Mismatch {
                engine: run.engine.clone(),
                detail: format!(
                    "key set differs from {} (missing {missing:?}, extra {extra:?})",
                    first.engine
                ),
            });
        }

        let tolerance = reference
            .precision()
            .tolerance()
            .max(run.result.precision().tolerance());
        for group in run.result.groups() {
            let expected = reference.get(group.first_letter).unwrap_or(f64::NAN);
            if !within_tolerance(group.mean_salary, expected, tolerance) {
                return Err(BenchError::Mismatch {
                    engine: run.engine.clone(),
                    detail: format!(
                        "mean for {:?} is {} but {} computed {}",
                        group.first_letter, group.mean_salary, first.engine, expected
                    ),
                });
            }
        }
    }

    Ok(())
}
