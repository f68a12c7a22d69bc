//! Catalog loading errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while loading or validating a question catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Catalog is empty")]
    Empty,

    #[error("Duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("Question '{id}' has non-positive weight {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("Choice question '{0}' has no options")]
    MissingOptions(String),

    #[error("Question '{0}' applies to no role")]
    NoRoles(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogError, err.to_string())
    }
}
