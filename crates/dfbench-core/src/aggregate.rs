//! Aggregate results and the partial sums engines build them from.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::constants::{DOUBLE_TOLERANCE, SINGLE_TOLERANCE};

/// Floating-point width an engine averaged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Double,
    Single,
}

impl Precision {
    /// Relative tolerance for values computed at this precision.
    #[must_use]
    pub fn tolerance(self) -> f64 {
        match self {
            Self::Double => DOUBLE_TOLERANCE,
            Self::Single => SINGLE_TOLERANCE,
        }
    }
}

/// Mean salary of one first-letter group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupMean {
    pub first_letter: char,
    pub mean_salary: f64,
}

/// Grouped means in the order the engine materialized them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    groups: Vec<GroupMean>,
    precision: Precision,
}

impl AggregateResult {
    #[must_use]
    pub fn new(groups: Vec<GroupMean>, precision: Precision) -> Self {
        Self { groups, precision }
    }

    #[must_use]
    pub fn groups(&self) -> &[GroupMean] {
        &self.groups
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Mean for `first_letter`, if that group exists.
    #[must_use]
    pub fn get(&self, first_letter: char) -> Option<f64> {
        self.groups
            .iter()
            .find(|g| g.first_letter == first_letter)
            .map(|g| g.mean_salary)
    }

    #[must_use]
    pub fn keys(&self) -> BTreeSet<char> {
        self.groups.iter().map(|g| g.first_letter).collect()
    }

    /// Groups ordered by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<GroupMean> {
        let mut groups = self.groups.clone();
        groups.sort_by_key(|g| g.first_letter);
        groups
    }

    /// First `n` groups in materialized order.
    #[must_use]
    pub fn head(&self, n: usize) -> &[GroupMean] {
        &self.groups[..n.min(self.groups.len())]
    }
}

/// Running salary sum and row count for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SalarySum {
    pub sum: i64,
    pub count: u64,
}

impl SalarySum {
    pub fn add(&mut self, salary: i64) {
        self.sum += salary;
        self.count += 1;
    }

    pub fn merge(&mut self, other: Self) {
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

/// Key-ordered partial sums, the shared core of the frame and partitioned engines.
#[derive(Debug, Clone, Default)]
pub(crate) struct GroupSums {
    groups: BTreeMap<char, SalarySum>,
}

impl GroupSums {
    pub fn add(&mut self, key: Option<char>, salary: i64) {
        if let Some(key) = key {
            self.groups.entry(key).or_default().add(salary);
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (key, partial) in other.groups {
            self.groups.entry(key).or_default().merge(partial);
        }
        self
    }

    pub fn into_result(self) -> AggregateResult {
        let groups = self
            .groups
            .into_iter()
            .map(|(first_letter, sums)| GroupMean {
                first_letter,
                mean_salary: sums.mean(),
            })
            .collect();
        AggregateResult::new(groups, Precision::Double)
    }
}

/// Whether `a` and `b` agree within `tolerance`, relative to the larger magnitude.
#[must_use]
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
