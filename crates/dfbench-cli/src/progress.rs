//! Spinner shown while the pipeline runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use dfbench_core::cache::CacheStatus;
use dfbench_core::observer::PipelineObserver;

use crate::output::format_number;

/// Pipeline observer that drives a terminal spinner on stderr.
///
/// The spinner draws nothing when stderr is not a terminal.
pub struct SpinnerObserver {
    bar: ProgressBar,
}

impl SpinnerObserver {
    /// Spinner on stderr, or a hidden one when `quiet`.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        };
        Self { bar }
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl PipelineObserver for SpinnerObserver {
    fn on_generating(&self, rows: usize) {
        self.bar
            .set_message(format!("Generating dataset of {} rows...", format_number(rows)));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_generated(&self, _rows: usize, _elapsed: Duration, _cache: CacheStatus) {
        self.bar.set_message("Converting dataset for each engine...");
    }

    fn on_engine_loaded(&self, engine: &str, _elapsed: Duration) {
        self.bar.set_message(format!("{engine} table ready"));
    }

    fn on_engine_finished(&self, engine: &str, _elapsed: Duration, groups: usize) {
        self.bar
            .set_message(format!("{engine} aggregated {groups} groups"));
    }
}

impl Drop for SpinnerObserver {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
