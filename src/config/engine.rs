//! Analysis engine configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::ConfigError;
use crate::domain::catalog::QuestionCatalog;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// YAML question catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Loads the configured catalog, or the built-in one when no path is set
    pub fn load_catalog(&self) -> Result<Arc<QuestionCatalog>, ConfigError> {
        let catalog = match &self.catalog_path {
            Some(path) => QuestionCatalog::from_yaml_file(path)?,
            None => QuestionCatalog::builtin()?.clone(),
        };
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_uses_builtin_catalog() {
        let catalog = EngineConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), QuestionCatalog::builtin().unwrap().len());
    }

    #[test]
    fn test_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"- id: only
  roles: [Manager]
  axis: Governance
  kind: numeric
  text_en: "Only question"
  text_ar: "سؤال"
  numeric_key: reworkPct"#
        )
        .unwrap();

        let config = EngineConfig {
            catalog_path: Some(file.path().to_path_buf()),
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("only").is_some());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = EngineConfig {
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.yaml")),
        };
        assert!(matches!(config.load_catalog(), Err(ConfigError::Catalog(_))));
    }
}
