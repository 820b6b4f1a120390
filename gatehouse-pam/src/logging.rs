//! Logging bootstrap for module hosts.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the process.
///
/// Respects `RUST_LOG` when set, falling back to `default_filter`.
/// Repeated initialization is a no-op.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .try_init();
}
