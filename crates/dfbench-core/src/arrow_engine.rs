//! Apache Arrow columnar engine.
//!
//! Salary is cast to `Float32` before averaging so the result carries the
//! same fixed-width precision on every run; means are materialized as a
//! `Float32` column.

use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float32Array, Int64Array, StringArray};
use arrow::compute::cast;
use arrow::compute::kernels::substring::substring_by_char;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::aggregate::{AggregateResult, GroupMean, Precision};
use crate::engine::{BenchError, Engine, LoadedTable};
use crate::options::Options;
use crate::record::Dataset;

const ENGINE_NAME: &str = "arrow";

/// Output column holding the grouping key.
pub const FIRST_LETTER_COLUMN: &str = "first_letter";

/// Output column holding the averaged salary.
pub const SALARY_COLUMN: &str = "salary";

/// Dataset held as a single Arrow record batch.
#[derive(Debug, Clone)]
pub struct ArrowTable {
    batch: RecordBatch,
}

impl ArrowTable {
    /// Build a record batch with one column per record field.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ArrowError> {
        let records = dataset.records();
        let schema = Arc::new(Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("email", DataType::Utf8, false),
            Field::new("address", DataType::Utf8, false),
            Field::new("age", DataType::Int64, false),
            Field::new(SALARY_COLUMN, DataType::Int64, false),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| &r.name))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| &r.email))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| &r.address))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.age))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.salary))),
        ];
        Ok(Self {
            batch: RecordBatch::try_new(schema, columns)?,
        })
    }

    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Group by the first character of `name` and average `salary` as `Float32`.
    ///
    /// Groups appear in order of first occurrence. Empty or null names
    /// belong to no group.
    #[allow(clippy::cast_possible_truncation)]
    pub fn aggregate_batch(&self) -> Result<RecordBatch, ArrowError> {
        let names = string_column(&self.batch, "name")?;
        let first_letters = substring_by_char(names, 0, Some(1))?;

        let salary = self
            .batch
            .column_by_name(SALARY_COLUMN)
            .ok_or_else(|| missing_column(SALARY_COLUMN))?;
        let salary = cast(salary, &DataType::Float32)?;
        let salary = salary
            .as_any()
            .downcast_ref::<Float32Array>()
            .ok_or_else(|| ArrowError::CastError("salary is not Float32".into()))?;

        let mut index: HashMap<char, usize> = HashMap::new();
        let mut groups: Vec<(char, f64, u64)> = Vec::new();
        for row in 0..first_letters.len() {
            if first_letters.is_null(row) || salary.is_null(row) {
                continue;
            }
            let Some(key) = first_letters.value(row).chars().next() else {
                continue;
            };
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push((key, 0.0, 0));
                groups.len() - 1
            });
            let group = &mut groups[slot];
            group.1 += f64::from(salary.value(row));
            group.2 += 1;
        }

        let keys = StringArray::from_iter_values(groups.iter().map(|g| g.0.to_string()));
        let means = Float32Array::from_iter_values(
            groups.iter().map(|&(_, sum, count)| (sum / count as f64) as f32),
        );
        let schema = Arc::new(Schema::new(vec![
            Field::new(FIRST_LETTER_COLUMN, DataType::Utf8, false),
            Field::new(SALARY_COLUMN, DataType::Float32, false),
        ]));
        RecordBatch::try_new(schema, vec![Arc::new(keys), Arc::new(means)])
    }
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray, ArrowError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| missing_column(name))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| ArrowError::CastError(format!("column {name} is not Utf8")))
}

fn missing_column(name: &str) -> ArrowError {
    ArrowError::SchemaError(format!("missing column {name}"))
}

/// Convert an aggregated batch into an engine-neutral result.
fn batch_to_result(batch: &RecordBatch) -> Result<AggregateResult, ArrowError> {
    let keys = string_column(batch, FIRST_LETTER_COLUMN)?;
    let means = batch
        .column_by_name(SALARY_COLUMN)
        .ok_or_else(|| missing_column(SALARY_COLUMN))?
        .as_any()
        .downcast_ref::<Float32Array>()
        .ok_or_else(|| ArrowError::CastError("mean column is not Float32".into()))?;

    let groups = keys
        .iter()
        .zip(means.iter())
        .filter_map(|(key, mean)| {
            let first_letter = key?.chars().next()?;
            Some(GroupMean {
                first_letter,
                mean_salary: f64::from(mean?),
            })
        })
        .collect();
    Ok(AggregateResult::new(groups, Precision::Single))
}

/// Engine backed by Arrow arrays and compute kernels.
#[derive(Debug, Default)]
pub struct ArrowEngine;

impl ArrowEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ArrowEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn label(&self) -> &str {
        "Arrow"
    }

    fn load(&self, dataset: &Dataset, _opts: &Options) -> Result<Box<dyn LoadedTable>, BenchError> {
        let table =
            ArrowTable::from_dataset(dataset).map_err(|e| BenchError::engine(ENGINE_NAME, e))?;
        Ok(Box::new(table))
    }
}

impl LoadedTable for ArrowTable {
    fn rows(&self) -> usize {
        self.batch.num_rows()
    }

    fn mean_salary_by_first_letter(&self) -> Result<AggregateResult, BenchError> {
        self.aggregate_batch()
            .and_then(|batch| batch_to_result(&batch))
            .map_err(|e| BenchError::engine(ENGINE_NAME, e))
    }
}
