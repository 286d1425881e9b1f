//! Telemetry - Logging setup

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber
///
/// Honors `RUST_LOG`, with `info` as the floor. Calling it twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init();
}
