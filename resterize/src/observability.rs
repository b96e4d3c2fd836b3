//! Tracing and log output setup

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize tracing with JSON formatting
///
/// The log level comes from the service configuration and can be overridden
/// per module with standard `EnvFilter` directives.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = config.service.log_level.clone();

    // a second install is a no-op
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}
