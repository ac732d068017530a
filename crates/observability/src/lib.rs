//! Tracing/logging setup shared by job worker processes and tests.
//!
//! Jobs run asynchronously with no interactive caller; log output is the
//! whole user-visible failure surface, so every worker process should call
//! `init()` before running jobs.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing with the default `info` filter.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with an explicit default filter, still overridable
/// through `RUST_LOG`.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
