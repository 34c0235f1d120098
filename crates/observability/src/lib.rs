//! Tracing/logging setup shared by the host binary and tests.

/// Initialize process-wide observability.
///
/// Safe to call multiple times; later calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatting).
pub mod tracing;
