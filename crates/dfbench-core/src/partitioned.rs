//! Partitioned table engine.
//!
//! The table is split into contiguous chunks; each chunk is reduced to
//! partial sums on the rayon pool and the partials are merged into a single
//! materialized result.

use rayon::prelude::*;

use crate::aggregate::{AggregateResult, GroupSums};
use crate::engine::{BenchError, Engine, LoadedTable};
use crate::frame::Frame;
use crate::options::Options;
use crate::record::Dataset;

/// A logical table held as several independent frames.
#[derive(Debug, Clone, Default)]
pub struct PartitionedFrame {
    partitions: Vec<Frame>,
}

impl PartitionedFrame {
    /// Split `dataset` into at most `partitions` contiguous, near-equal chunks.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, partitions: usize) -> Self {
        let records = dataset.records();
        if records.is_empty() {
            return Self::default();
        }
        let chunk = records.len().div_ceil(partitions.max(1));
        Self {
            partitions: records.chunks(chunk).map(Frame::from_records).collect(),
        }
    }

    #[must_use]
    pub fn partitions(&self) -> &[Frame] {
        &self.partitions
    }

    #[must_use]
    pub fn num_partitions(&self) -> usize {
        self.partitions.len()
    }
}

/// Engine grouping chunk by chunk in parallel.
#[derive(Debug, Default)]
pub struct PartitionedEngine;

impl PartitionedEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Engine for PartitionedEngine {
    fn name(&self) -> &str {
        "partitioned"
    }

    fn label(&self) -> &str {
        "Partitioned"
    }

    fn load(&self, dataset: &Dataset, opts: &Options) -> Result<Box<dyn LoadedTable>, BenchError> {
        let table = PartitionedFrame::from_dataset(dataset, opts.partitions);
        tracing::debug!(partitions = table.num_partitions(), "partitioned table loaded");
        Ok(Box::new(table))
    }
}

impl LoadedTable for PartitionedFrame {
    fn rows(&self) -> usize {
        self.partitions.iter().map(Frame::len).sum()
    }

    fn mean_salary_by_first_letter(&self) -> Result<AggregateResult, BenchError> {
        let merged = self
            .partitions
            .par_iter()
            .map(Frame::group_sums)
            .reduce(GroupSums::default, GroupSums::merge);
        Ok(merged.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn dataset(n: usize) -> Dataset {
        Dataset::from_records(
            (0..n)
                .map(|i| Record {
                    name: if i % 2 == 0 { "Alma".into() } else { "Bea".into() },
                    email: String::new(),
                    address: String::new(),
                    age: 30,
                    salary: 30_000 + i as i64,
                })
                .collect(),
        )
    }

    #[test]
    fn splits_into_requested_partitions() {
        let table = PartitionedFrame::from_dataset(&dataset(10), 4);
        assert_eq!(table.num_partitions(), 4);
        let sizes: Vec<usize> = table.partitions().iter().map(Frame::len).collect();
        assert_eq!(sizes, [3, 3, 3, 1]);
        assert_eq!(table.rows(), 10);
    }

    #[test]
    fn fewer_rows_than_partitions() {
        let table = PartitionedFrame::from_dataset(&dataset(2), 4);
        assert_eq!(table.num_partitions(), 2);
        assert_eq!(table.rows(), 2);
    }

    #[test]
    fn empty_dataset_has_no_partitions() {
        let table = PartitionedFrame::from_dataset(&Dataset::default(), 4);
        assert_eq!(table.num_partitions(), 0);
        assert!(table.mean_salary_by_first_letter().unwrap().is_empty());
    }

    #[test]
    fn zero_partitions_means_one() {
        let table = PartitionedFrame::from_dataset(&dataset(5), 0);
        assert_eq!(table.num_partitions(), 1);
    }

    #[test]
    fn merged_means_match_single_frame() {
        let ds = dataset(101);
        let whole = Frame::from_records(ds.records())
            .mean_salary_by_first_letter()
            .unwrap();
        for partitions in [1, 2, 3, 4, 7, 101] {
            let split = PartitionedFrame::from_dataset(&ds, partitions)
                .mean_salary_by_first_letter()
                .unwrap();
            assert_eq!(split, whole, "partitions = {partitions}");
        }
    }

    #[test]
    fn engine_uses_options_partitions() {
        let table = PartitionedEngine::new()
            .load(&dataset(20), &Options { partitions: 5 })
            .unwrap();
        assert_eq!(table.rows(), 20);
    }
}
