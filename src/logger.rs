//! Logging helpers.
//!
//! Thin wrappers over `tracing` so call sites carry a component scope in
//! the usual "scope: message" shape.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Host adapters call this once
/// at startup; repeated calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

pub fn log_info(scope: &str, message: impl AsRef<str>) {
    tracing::info!("{}: {}", scope, message.as_ref());
}

pub fn log_warn(scope: &str, message: impl AsRef<str>) {
    tracing::warn!("{}: {}", scope, message.as_ref());
}

pub fn log_error(scope: &str, message: impl AsRef<str>) {
    tracing::error!("{}: {}", scope, message.as_ref());
}
