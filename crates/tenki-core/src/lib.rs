pub mod config;
pub mod error;
pub mod settings;

pub use config::{Config, ConfigValidationError, ValidationResult};
pub use error::{AppError, ConfigError, WeatherError};
pub use settings::SettingsStore;

use anyhow::Result;

/// Initialize logging
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("Tenki core initialized");
    Ok(())
}
