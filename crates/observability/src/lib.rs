//! Tracing/logging setup shared by binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left to
//! the process entry point.

pub mod config;
/// Tracing subscriber installation (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}
