//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// Status lines are printed by the console output; only warnings such as a
/// partial file left on disk show up alongside them.
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests); that is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
