//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Defaults to `info`, overridable via `RUST_LOG`. Idempotent: if a
/// subscriber is already installed (tests call this per-process), the call
/// is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
