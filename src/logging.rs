//! Diagnostic logging setup.
//!
//! Log records go to stderr so stdout carries only calculator output.
//! The filter is read from `ARITH_LOG` (e.g. `ARITH_LOG=debug`).

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};

/// Build the log filter from the environment, falling back to `warn`.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
