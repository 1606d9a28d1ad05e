//! Bridge between pipeline events and TUI messages.

use std::time::Duration;

use crossbeam_channel::Sender;

use dfbench_cli::output::{format_number, format_seconds};
use dfbench_core::cache::CacheStatus;
use dfbench_core::observer::PipelineObserver;
use dfbench_orchestration::interfaces::{Agreement, EngineRun, GenerationReport, ResultPresenter};

use crate::messages::TuiMessage;

/// Pipeline observer that forwards stage events for one request.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
    generation: u64,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>, generation: u64) -> Self {
        Self { tx, generation }
    }
}

impl PipelineObserver for TuiBridgeObserver {
    fn on_generating(&self, rows: usize) {
        let _ = self.tx.send(TuiMessage::Started {
            generation: self.generation,
            rows,
        });
    }

    fn on_generated(&self, _rows: usize, elapsed: Duration, cache: CacheStatus) {
        let _ = self.tx.send(TuiMessage::Generated {
            generation: self.generation,
            elapsed,
            cache,
        });
    }

    fn on_engine_finished(&self, engine: &str, elapsed: Duration, _groups: usize) {
        let _ = self.tx.send(TuiMessage::EngineFinished {
            generation: self.generation,
            engine: engine.to_string(),
            duration: elapsed,
        });
    }
}

/// Presenter that turns a report into log lines.
pub struct TuiResultPresenter {
    tx: Sender<TuiMessage>,
    generation: u64,
}

impl TuiResultPresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>, generation: u64) -> Self {
        Self { tx, generation }
    }

    fn log(&self, line: String) {
        let _ = self.tx.send(TuiMessage::Log {
            generation: self.generation,
            line,
        });
    }
}

impl ResultPresenter for TuiResultPresenter {
    fn present_generation(&self, generation: &GenerationReport) {
        let cached = if generation.cache.is_hit() { " (cached)" } else { "" };
        self.log(format!(
            "#{} dataset of {} rows in {} sec{cached}",
            self.generation,
            format_number(generation.rows),
            format_seconds(generation.elapsed, 2)
        ));
    }

    fn present_runs(&self, runs: &[EngineRun]) {
        for run in runs {
            self.log(format!(
                "#{} {}: {} groups in {} sec",
                self.generation,
                run.label,
                run.result.len(),
                format_seconds(run.duration, 4)
            ));
        }
    }

    fn present_agreement(&self, agreement: &Agreement) {
        match agreement {
            Agreement::Verified => self.log(format!("#{} engines agree", self.generation)),
            Agreement::Mismatch(detail) => {
                self.log(format!("[WARN] #{} engines disagree: {detail}", self.generation));
            }
            Agreement::NotChecked => {}
        }
    }

    fn present_error(&self, error: &str) {
        let _ = self.tx.send(TuiMessage::Failed {
            generation: self.generation,
            error: error.to_string(),
        });
    }
}
