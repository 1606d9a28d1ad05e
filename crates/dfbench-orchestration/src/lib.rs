//! # dfbench-orchestration
//!
//! Sequential pipeline execution, engine selection, and result analysis.

pub mod engine_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{EngineRun, GenerationReport, PipelineReport, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_engines, run_pipeline};
