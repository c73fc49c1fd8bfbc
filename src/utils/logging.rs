// ============================================================================
// Logging Setup
// tracing-subscriber initialisation driven by RUST_LOG
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "ledger_decimal=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
