//! Logging configuration for Sketch.
//!
//! Logs go to stderr so stdout stays clean for chart output that callers
//! may want to pipe into a file or another tool.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
///
/// The filter is taken from `RUST_LOG` when set, defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
