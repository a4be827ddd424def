//! Logging initialization
//!
//! Provides a single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup (or from a test harness); further calls are no-ops.
/// Installs a human-readable `tracing` subscriber filtered by `RUST_LOG`,
/// defaulting to `tabshot=info`.
pub fn init() {
    INIT_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tabshot=info")),
            )
            .init();
    });
}
