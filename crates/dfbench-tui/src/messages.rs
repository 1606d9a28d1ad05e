//! TUI message types (Elm Messages).

use std::time::Duration;

use dfbench_core::cache::CacheStatus;
use dfbench_orchestration::interfaces::PipelineReport;

/// System metrics snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SystemMetrics {
    /// CPU usage as a percentage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Memory usage in megabytes.
    pub memory_mb: f64,
}

/// A pipeline run requested by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineRequest {
    pub generation: u64,
    pub rows: usize,
}

/// Messages that drive the TUI update cycle.
///
/// Pipeline messages carry the generation of the request that produced
/// them; the model ignores any generation other than its latest.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// The worker picked up a request.
    Started { generation: u64, rows: usize },
    /// Dataset ready.
    Generated {
        generation: u64,
        elapsed: Duration,
        cache: CacheStatus,
    },
    /// One engine finished aggregating.
    EngineFinished {
        generation: u64,
        engine: String,
        duration: Duration,
    },
    /// Whole pipeline finished.
    Completed {
        generation: u64,
        report: Box<PipelineReport>,
    },
    /// Pipeline aborted.
    Failed { generation: u64, error: String },
    /// Log line produced while serving a request.
    Log { generation: u64, line: String },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// System metrics update (CPU, memory).
    SystemMetrics(SystemMetrics),
}

impl TuiMessage {
    /// Generation of the request a pipeline message belongs to.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Started { generation, .. }
            | Self::Generated { generation, .. }
            | Self::EngineFinished { generation, .. }
            | Self::Completed { generation, .. }
            | Self::Failed { generation, .. }
            | Self::Log { generation, .. } => Some(*generation),
            Self::KeyPress(_) | Self::SystemMetrics(_) => None,
        }
    }
}
