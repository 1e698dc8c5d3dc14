//! Tracing subscriber bootstrap.

use std::env;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the log filter: `rust_log` when it parses, `default_directive` otherwise.
pub fn env_filter(rust_log: Option<&str>, default_directive: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins over `default_directive` when it is set and valid.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<(), TryInitError> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(rust_log.as_deref(), default_directive))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
