//! # dfbench-cli
//!
//! CLI output, side-by-side result panels, JSON reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod report;
pub mod ui;

pub use presenter::CliPresenter;
pub use progress::SpinnerObserver;
pub use report::to_json;
