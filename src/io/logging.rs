//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install the global stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity default. Returns `false`
/// when a subscriber was already installed, which makes repeated calls
/// harmless.
pub fn init_logging(quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
