//! Record and dataset model.

use serde::{Deserialize, Serialize};

/// One synthetic person-like row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: i64,
    pub salary: i64,
}

impl Record {
    /// First Unicode scalar of the name, the grouping key of every engine.
    ///
    /// Case-sensitive and unnormalized. `None` for an empty name.
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        first_letter(&self.name)
    }
}

/// First character of `name`, or `None` when it is empty.
#[must_use]
pub fn first_letter(name: &str) -> Option<char> {
    name.chars().next()
}

/// Immutable, ordered collection of records produced for one row count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap already-built records without validating their count.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
