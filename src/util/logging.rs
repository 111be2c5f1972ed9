// PathScout - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Level string passed by the host at extension load
//
// Output: stderr, compact format. Never logs secrets or PII at any level.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem when the host loads the extension.
///
/// `host_level` is the level the host passes through from its own settings
/// (if any). Priority: RUST_LOG env var > host level > default "info".
pub fn init(host_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        // RUST_LOG takes highest priority (already set)
        EnvFilter::from_default_env()
    } else if let Some(level) = host_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    // The host process may already own the global subscriber; a second
    // init must not panic the extension load.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            extension = super::constants::EXTENSION_NAME,
            version = super::constants::EXTENSION_VERSION,
            "Logging initialised"
        );
    }
}
