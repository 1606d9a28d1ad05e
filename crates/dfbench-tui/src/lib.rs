//! # dfbench-tui
//!
//! Interactive dashboard using ratatui with Elm architecture: a row-count
//! slider drives a background pipeline worker, and the latest request's
//! results are shown side by side.

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod metrics;
pub mod model;
pub mod panels;
pub mod slider;
pub mod styles;
pub mod worker;

pub use bridge::{TuiBridgeObserver, TuiResultPresenter};
pub use logs::LogPanel;
pub use messages::{PipelineRequest, SystemMetrics, TuiMessage};
pub use metrics::MetricsCollector;
pub use model::TuiApp;
pub use worker::PipelineWorker;
