//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
///
/// Honors `RUST_LOG`; falls back to `info`.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Initialize tracing with a caller-chosen filter used when `RUST_LOG` is unset
///
/// Binaries use this to keep dependency noise down, e.g.
/// `"warn,agent_report=info"`.
pub fn init_tracing_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second initialisation (tests, embedding) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
