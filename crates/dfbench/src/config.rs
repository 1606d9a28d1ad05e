//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use dfbench_core::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_PARTITIONS, DEFAULT_PREVIEW_ROWS, DEFAULT_ROWS, MAX_ROWS,
    MIN_ROWS,
};
use dfbench_core::generator::DataGenerator;
use dfbench_core::options::Options;

use crate::version::LONG_VERSION;

/// Report format for CLI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// dfbench: average salary by first letter of name, computed by three
/// engines on a synthetic dataset.
#[derive(Parser, Debug)]
#[command(name = "dfbench", version, long_version = LONG_VERSION)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of rows to generate (100 to 1,000,000).
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_ROWS,
        env = "DFBENCH_ROWS",
        value_parser = parse_rows
    )]
    pub rows: usize,

    /// Engines to run: frame, partitioned, arrow, a comma-separated list, or all.
    #[arg(long, default_value = "all")]
    pub engine: String,

    /// Number of chunks for the partitioned engine.
    #[arg(long, default_value_t = DEFAULT_PARTITIONS)]
    pub partitions: usize,

    /// Seed for reproducible datasets.
    #[arg(long, env = "DFBENCH_SEED")]
    pub seed: Option<u64>,

    /// Number of groups shown per engine.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Number of datasets kept in memory, keyed by row count.
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: usize,

    /// Skip the cross-engine agreement check.
    #[arg(long)]
    pub no_verify: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the report to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (results only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output: load times and info-level logs.
    #[arg(short, long)]
    pub verbose: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options, normalized.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            partitions: self.partitions,
        }
        .normalize()
    }

    /// Generator seeded from `--seed` when given.
    #[must_use]
    pub fn generator(&self) -> DataGenerator {
        self.seed.map_or_else(DataGenerator::new, DataGenerator::with_seed)
    }

    #[must_use]
    pub fn verify(&self) -> bool {
        !self.no_verify
    }
}

/// Parse a row count, rejecting values outside the slider range.
fn parse_rows(s: &str) -> Result<usize, String> {
    let rows: usize = s
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|e| format!("invalid row count {s:?}: {e}"))?;
    if (MIN_ROWS..=MAX_ROWS).contains(&rows) {
        Ok(rows)
    } else {
        Err(format!("row count must be between {MIN_ROWS} and {MAX_ROWS}"))
    }
}
