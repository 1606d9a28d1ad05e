//! Single in-memory table engine.

use crate::aggregate::{AggregateResult, GroupSums};
use crate::engine::{BenchError, Engine, LoadedTable};
use crate::options::Options;
use crate::record::{first_letter, Dataset, Record};

/// Column-oriented copy of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub name: Vec<String>,
    pub email: Vec<String>,
    pub address: Vec<String>,
    pub age: Vec<i64>,
    pub salary: Vec<i64>,
}

impl Frame {
    /// Build columns from a slice of records.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut frame = Self {
            name: Vec::with_capacity(records.len()),
            email: Vec::with_capacity(records.len()),
            address: Vec::with_capacity(records.len()),
            age: Vec::with_capacity(records.len()),
            salary: Vec::with_capacity(records.len()),
        };
        for r in records {
            frame.name.push(r.name.clone());
            frame.email.push(r.email.clone());
            frame.address.push(r.address.clone());
            frame.age.push(r.age);
            frame.salary.push(r.salary);
        }
        frame
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Derived key column: first character of each name.
    #[must_use]
    pub fn first_letter_column(&self) -> Vec<Option<char>> {
        self.name.iter().map(|n| first_letter(n)).collect()
    }

    /// Partial sums of `salary` keyed by the first-letter column.
    pub(crate) fn group_sums(&self) -> GroupSums {
        let keys = self.first_letter_column();
        let mut sums = GroupSums::default();
        for (key, &salary) in keys.into_iter().zip(&self.salary) {
            sums.add(key, salary);
        }
        sums
    }
}

/// Engine grouping over one contiguous table.
#[derive(Debug, Default)]
pub struct FrameEngine;

impl FrameEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Engine for FrameEngine {
    fn name(&self) -> &str {
        "frame"
    }

    fn label(&self) -> &str {
        "Frame"
    }

    fn load(&self, dataset: &Dataset, _opts: &Options) -> Result<Box<dyn LoadedTable>, BenchError> {
        Ok(Box::new(Frame::from_records(dataset.records())))
    }
}

impl LoadedTable for Frame {
    fn rows(&self) -> usize {
        self.len()
    }

    fn mean_salary_by_first_letter(&self) -> Result<AggregateResult, BenchError> {
        Ok(self.group_sums().into_result())
    }
}
