//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to command
//! output. The filter comes from `FINTRACK_LOG`, then `RUST_LOG`, and
//! defaults to warnings and errors only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FINTRACK_LOG";

const DEFAULT_FILTER: &str = "fintrack=warn";

static TRACING_INIT: Once = Once::new();

/// Build the filter from the environment
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // Ignore the error if a subscriber is already installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
