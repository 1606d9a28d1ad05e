//! Version information.

/// Text shown by `--version` in its long form.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nengines: frame, partitioned, arrow"
);
