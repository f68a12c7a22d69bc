//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MATURITY_ASSESSMENT` prefix and nested values use double underscores as
//! separators. Every section has defaults, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use maturity_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Failed to initialize logging");
//!
//! let catalog = config.engine.load_catalog().expect("Failed to load catalog");
//! println!("{} questions loaded", catalog.len());
//! ```

mod engine;
mod error;
mod logging;
mod storage;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::domain::assessment::RoiSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Question catalog source
    #[serde(default)]
    pub engine: EngineConfig,

    /// ROI assumptions given to new assessments
    #[serde(default)]
    pub roi: RoiSettings,

    /// Assessment persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MATURITY_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MATURITY_ASSESSMENT__ROI__HOURLY_COST=85` -> `roi.hourly_cost = 85`
    /// - `MATURITY_ASSESSMENT__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MATURITY_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.roi
            .validate()
            .map_err(|e| ValidationError::InvalidRoiDefaults(e.to_string()))?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
