//! Golden file integration tests.
//!
//! Reads tests/testdata/aggregation_golden.json and verifies all 3 engines
//! produce the expected grouped means for a fixed set of records.

use std::sync::Arc;

use serde::Deserialize;

use dfbench_core::aggregate::{within_tolerance, Precision};
use dfbench_core::engine::Engine;
use dfbench_core::observer::NoOpObserver;
use dfbench_core::options::Options;
use dfbench_core::partitioned::PartitionedEngine;
use dfbench_core::record::{Dataset, Record};
use dfbench_core::registry::{DefaultFactory, EngineFactory};
use dfbench_orchestration::orchestrator::{analyze_comparison_results, execute_engines};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    records: Vec<Record>,
    expected: Vec<ExpectedGroup>,
}

#[derive(Deserialize)]
struct ExpectedGroup {
    first_letter: char,
    mean_salary: f64,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/aggregation_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn all_engines() -> Vec<Arc<dyn Engine>> {
    let factory = DefaultFactory::new();
    factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Golden: grouped means per engine
// ---------------------------------------------------------------------------

#[test]
fn golden_means_all_engines() {
    let data = load_golden_data();
    let dataset = Dataset::from_records(data.records);
    let opts = Options::default();

    for engine in all_engines() {
        let table = engine.load(&dataset, &opts).unwrap();
        assert_eq!(table.rows(), dataset.len());
        let result = table.mean_salary_by_first_letter().unwrap();
        assert_eq!(
            result.len(),
            data.expected.len(),
            "{} produced {:?}",
            engine.name(),
            result.keys()
        );
        let tolerance = result.precision().tolerance();
        for group in &data.expected {
            let mean = result
                .get(group.first_letter)
                .unwrap_or_else(|| panic!("{} lacks {}", engine.name(), group.first_letter));
            assert!(
                within_tolerance(mean, group.mean_salary, tolerance),
                "{}: {} got {mean}, expected {}",
                engine.name(),
                group.first_letter,
                group.mean_salary
            );
        }
    }
}

#[test]
fn golden_double_precision_engines_exact() {
    let data = load_golden_data();
    let dataset = Dataset::from_records(data.records);
    let factory = DefaultFactory::new();

    for name in ["frame", "partitioned"] {
        let result = factory
            .get(name)
            .unwrap()
            .load(&dataset, &Options::default())
            .unwrap()
            .mean_salary_by_first_letter()
            .unwrap();
        assert_eq!(result.precision(), Precision::Double);
        for group in &data.expected {
            assert_eq!(result.get(group.first_letter), Some(group.mean_salary));
        }
    }
}

#[test]
fn golden_arrow_keeps_first_seen_order() {
    let data = load_golden_data();
    let dataset = Dataset::from_records(data.records);
    let result = DefaultFactory::new()
        .get("arrow")
        .unwrap()
        .load(&dataset, &Options::default())
        .unwrap()
        .mean_salary_by_first_letter()
        .unwrap();
    let order: Vec<char> = result.groups().iter().map(|g| g.first_letter).collect();
    let expected: Vec<char> = data.expected.iter().map(|g| g.first_letter).collect();
    assert_eq!(order, expected);
}

#[test]
fn golden_partition_count_does_not_matter() {
    let data = load_golden_data();
    let dataset = Dataset::from_records(data.records);
    let engine = PartitionedEngine::new();
    let reference = engine
        .load(&dataset, &Options { partitions: 1 })
        .unwrap()
        .mean_salary_by_first_letter()
        .unwrap();

    for partitions in 2..=dataset.len() + 3 {
        let result = engine
            .load(&dataset, &Options { partitions })
            .unwrap()
            .mean_salary_by_first_letter()
            .unwrap();
        assert_eq!(result, reference, "partitions = {partitions}");
    }
}

// ---------------------------------------------------------------------------
// Golden: orchestration over the fixed dataset
// ---------------------------------------------------------------------------

#[test]
fn golden_engines_agree_through_orchestrator() {
    let data = load_golden_data();
    let dataset = Dataset::from_records(data.records);
    let runs = execute_engines(
        &all_engines(),
        &dataset,
        &Options::default(),
        &NoOpObserver::new(),
    )
    .unwrap();
    assert_eq!(runs.len(), 3);
    analyze_comparison_results(&runs).unwrap();
}
