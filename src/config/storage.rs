//! Assessment storage configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ValidationError;
use crate::adapters::{FileAssessmentRepository, InMemoryAssessmentRepository};
use crate::ports::AssessmentRepository;

/// Which repository adapter to use
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding one JSON file per assessment (file backend)
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.is_none() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }

    /// Build the configured repository adapter
    pub fn build_repository(&self) -> Result<Arc<dyn AssessmentRepository>, ValidationError> {
        match (self.backend, &self.data_dir) {
            (StorageBackend::Memory, _) => Ok(Arc::new(InMemoryAssessmentRepository::new())),
            (StorageBackend::File, Some(dir)) => Ok(Arc::new(FileAssessmentRepository::new(dir))),
            (StorageBackend::File, None) => Err(ValidationError::MissingRequired("storage.data_dir")),
        }
    }
}
