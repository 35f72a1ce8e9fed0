//! App-wide constants.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "arith";

/// Crate version, shown by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "ARITH_LOG";

/// Filter used when [`ENV_LOG`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
