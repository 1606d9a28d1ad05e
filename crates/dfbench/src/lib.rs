//! dfbench library: application logic behind the `dfbench` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod version;
