//! Configuration error types

use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Question catalog could not be loaded: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid ROI defaults: {0}")]
    InvalidRoiDefaults(String),

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
