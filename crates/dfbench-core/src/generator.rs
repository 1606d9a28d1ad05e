//! Synthetic dataset generation.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{AGE_RANGE, MAX_ROWS, MIN_ROWS, SALARY_RANGE};
use crate::engine::BenchError;
use crate::faker::Faker;
use crate::record::{Dataset, Record};

/// Produces datasets of independently sampled records.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataGenerator {
    seed: Option<u64>,
}

impl DataGenerator {
    /// Generator drawing from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate exactly `rows` records.
    ///
    /// Fields are sampled column by column: every name, then every email,
    /// then addresses, ages, and salaries.
    pub fn generate(&self, rows: usize) -> Result<Dataset, BenchError> {
        validate_rows(rows)?;
        let start = Instant::now();
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut fake = Faker::new(rng);

        let names: Vec<String> = (0..rows).map(|_| fake.name()).collect();
        let emails: Vec<String> = (0..rows).map(|_| fake.email()).collect();
        let addresses: Vec<String> = (0..rows).map(|_| fake.address()).collect();
        let ages: Vec<i64> = (0..rows)
            .map(|_| fake.random_int(AGE_RANGE.0, AGE_RANGE.1))
            .collect();
        let salaries: Vec<i64> = (0..rows)
            .map(|_| fake.random_int(SALARY_RANGE.0, SALARY_RANGE.1))
            .collect();

        let records = names
            .into_iter()
            .zip(emails)
            .zip(addresses)
            .zip(ages.into_iter().zip(salaries))
            .map(|(((name, email), address), (age, salary))| Record {
                name,
                email,
                address,
                age,
                salary,
            })
            .collect();

        tracing::debug!(rows, elapsed = ?start.elapsed(), "dataset generated");
        Ok(Dataset::from_records(records))
    }
}

/// Reject row counts outside `MIN_ROWS..=MAX_ROWS`.
pub fn validate_rows(rows: usize) -> Result<(), BenchError> {
    if (MIN_ROWS..=MAX_ROWS).contains(&rows) {
        Ok(())
    } else {
        Err(BenchError::InvalidRowCount {
            rows,
            min: MIN_ROWS,
            max: MAX_ROWS,
        })
    }
}
