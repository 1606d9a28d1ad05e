//! Property-based tests for cross-engine agreement.
//!
//! These tests exercise the `Engine` trait directly on generated and
//! hand-built datasets.

use proptest::prelude::*;

use dfbench_core::aggregate::within_tolerance;
use dfbench_core::arrow_engine::ArrowEngine;
use dfbench_core::frame::FrameEngine;
use dfbench_core::partitioned::PartitionedEngine;
use dfbench_core::{
    AggregateResult, DataGenerator, Dataset, Engine, Options, Record, MAX_ROWS, MIN_ROWS,
};

fn aggregate(engine: &dyn Engine, ds: &Dataset, opts: &Options) -> AggregateResult {
    engine
        .load(ds, opts)
        .unwrap()
        .mean_salary_by_first_letter()
        .unwrap()
}

fn assert_agree(a: &AggregateResult, b: &AggregateResult, tolerance: f64) {
    assert_eq!(a.keys(), b.keys());
    for g in a.groups() {
        let other = b.get(g.first_letter).unwrap();
        assert!(
            within_tolerance(g.mean_salary, other, tolerance),
            "{}: {} vs {}",
            g.first_letter,
            g.mean_salary,
            other
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// All three engines agree on generated data of any size and seed.
    #[test]
    fn engines_agree(seed in any::<u64>(), rows in MIN_ROWS..3_000usize, partitions in 1usize..9) {
        let ds = DataGenerator::with_seed(seed).generate(rows).unwrap();
        let opts = Options { partitions };
        let a = aggregate(&FrameEngine::new(), &ds, &opts);
        let b = aggregate(&PartitionedEngine::new(), &ds, &opts);
        let c = aggregate(&ArrowEngine::new(), &ds, &opts);

        prop_assert!(!a.is_empty());
        prop_assert!(a.len() <= 26);
        prop_assert!(a.keys().iter().all(char::is_ascii_uppercase));
        assert_agree(&a, &b, 1e-6);
        assert_agree(&a, &c, 1e-3);
    }

    /// Every generated record lies within its field domains.
    #[test]
    fn generated_fields_in_domain(seed in any::<u64>(), rows in MIN_ROWS..1_000usize) {
        let ds = DataGenerator::with_seed(seed).generate(rows).unwrap();
        prop_assert_eq!(ds.len(), rows);
        for r in &ds {
            prop_assert!((18..=80).contains(&r.age));
            prop_assert!((30_000..=120_000).contains(&r.salary));
        }
    }

    /// Arbitrary Unicode names group identically across engines.
    #[test]
    fn unicode_names_group_consistently(
        names in prop::collection::vec("\\PC{0,6}", 1..60),
        salary in 30_000i64..=120_000,
    ) {
        let records = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Record {
                name,
                email: String::new(),
                address: String::new(),
                age: 18,
                salary: salary + i as i64,
            })
            .collect();
        let ds = Dataset::from_records(records);
        let opts = Options::default();
        let a = aggregate(&FrameEngine::new(), &ds, &opts);
        let b = aggregate(&PartitionedEngine::new(), &ds, &opts);
        let c = aggregate(&ArrowEngine::new(), &ds, &opts);
        assert_agree(&a, &b, 1e-6);
        assert_agree(&a, &c, 1e-3);
    }
}

/// Known names: the "A" group mean equals a hand-computed reference.
#[test]
fn known_names_scenario() {
    let rows = [
        ("Alice Smith", 50_000),
        ("Aaron Jones", 70_000),
        ("Amy Brown", 61_000),
        ("Brian King", 40_000),
        ("Carla Diaz", 90_000),
    ];
    let mut records: Vec<Record> = rows
        .iter()
        .map(|&(name, salary)| Record {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            address: "1 Main Street\nTown, ST 00000".to_string(),
            age: 30,
            salary,
        })
        .collect();
    // Pad to the minimum row count with groups other than "A".
    while records.len() < MIN_ROWS {
        records.push(Record {
            name: "Zoe Young".to_string(),
            email: String::new(),
            address: String::new(),
            age: 25,
            salary: 30_000,
        });
    }
    let ds = Dataset::from_records(records);
    let reference = (50_000.0 + 70_000.0 + 61_000.0) / 3.0;
    let opts = Options::default();

    for (engine, tolerance) in [
        (&FrameEngine::new() as &dyn Engine, 1e-6),
        (&PartitionedEngine::new(), 1e-6),
        (&ArrowEngine::new(), 1e-3),
    ] {
        let mean = aggregate(engine, &ds, &opts).get('A').unwrap();
        assert!(
            within_tolerance(mean, reference, tolerance),
            "{}: {mean} vs {reference}",
            engine.name()
        );
    }
}

/// Aggregating the same loaded table twice gives identical results.
#[test]
fn aggregation_idempotent_per_engine() {
    let ds = DataGenerator::with_seed(9).generate(MIN_ROWS).unwrap();
    let opts = Options::default();
    let engines: [&dyn Engine; 3] = [
        &FrameEngine::new(),
        &PartitionedEngine::new(),
        &ArrowEngine::new(),
    ];
    for engine in engines {
        let table = engine.load(&ds, &opts).unwrap();
        let first = table.mean_salary_by_first_letter().unwrap();
        let second = table.mean_salary_by_first_letter().unwrap();
        assert_eq!(first, second, "{}", engine.name());
    }
}

/// Largest accepted dataset: slow without optimizations.
#[test]
#[ignore = "generates one million records"]
fn maximum_rows_boundary() {
    let ds = DataGenerator::with_seed(1).generate(MAX_ROWS).unwrap();
    assert_eq!(ds.len(), MAX_ROWS);
    let opts = Options::default();
    let a = aggregate(&FrameEngine::new(), &ds, &opts);
    let b = aggregate(&PartitionedEngine::new(), &ds, &opts);
    let c = aggregate(&ArrowEngine::new(), &ds, &opts);
    assert!(!a.is_empty() && a.len() <= 26);
    assert_agree(&a, &b, 1e-6);
    assert_agree(&a, &c, 1e-3);
}
