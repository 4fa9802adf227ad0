//! `petsched-observability` — process-wide tracing setup.
//!
//! The engine crates emit `tracing` events (skipped rows, zero-priced
//! appointments, pass summaries); the host process decides where they go by
//! calling one of the initializers here.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the `RUST_LOG` filter, defaulting to `info`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with an explicit default filter, still overridable via
/// `RUST_LOG`. Useful in tests that want engine warnings surfaced.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON lines so the host's log pipeline can index the field values.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
