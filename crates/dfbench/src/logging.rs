//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// Whether to install a subscriber at all.
///
/// The TUI owns the terminal, so it only logs when asked explicitly.
#[must_use]
pub fn enabled(tui: bool, rust_log_set: bool) -> bool {
    !tui || rust_log_set
}

/// Install the global subscriber, writing to stderr.
pub fn init(config: &AppConfig) {
    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if !enabled(config.tui, rust_log_set) {
        return;
    }
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(config.verbose).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
