//! File-based Assessment Repository Adapter
//!
//! Stores each assessment as `<id>.json` under a base directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentRepository;

const FILE_EXTENSION: &str = "json";

/// File-based storage for assessments
#[derive(Debug, Clone)]
pub struct FileAssessmentRepository {
    base_path: PathBuf,
}

impl FileAssessmentRepository {
    /// Create a new file repository rooted at `base_path`
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileAssessmentRepository::new("./data/assessments");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn file_path(&self, id: &AssessmentId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, FILE_EXTENSION))
    }

    async fn read_assessment(path: &Path) -> Result<Option<Assessment>, DomainError> {
        let json = match fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };

        serde_json::from_str(&json).map(Some).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to parse assessment: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })
    }
}

fn io_error(path: &Path, error: std::io::Error) -> DomainError {
    DomainError::storage(error).with_detail("path", path.display().to_string())
}

#[async_trait]
impl AssessmentRepository for FileAssessmentRepository {
    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Self::read_assessment(&self.file_path(id)).await
    }

    async fn put(&self, assessment: &Assessment) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error(&self.base_path, e))?;

        let json = serde_json::to_string_pretty(assessment).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize assessment: {}", e),
            )
        })?;

        let path = self.file_path(&assessment.id);
        fs::write(&path, json).await.map_err(|e| io_error(&path, e))
    }

    async fn list(&self) -> Result<Vec<Assessment>, DomainError> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.base_path, e)),
        };

        let mut assessments = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.base_path, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            match Self::read_assessment(&path).await {
                Ok(Some(assessment)) => assessments.push(assessment),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable assessment"),
            }
        }

        assessments.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(assessments)
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        let path = self.file_path(id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DomainError::assessment_not_found(id)),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Answer, CompanySize, Respondent};
    use crate::domain::catalog::Role;
    use crate::domain::foundation::Timestamp;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn test_assessment(client: &str) -> Assessment {
        let mut assessment = Assessment::new(client, "Assessor", CompanySize::Large).unwrap();
        let mut respondent = Respondent::new(Role::Engineer, "م. خالد");
        respondent.record(Answer::number("reporting", 2.5));
        respondent.skip("tools");
        assessment.add_respondent(respondent).unwrap();
        assessment
    }

    #[tokio::test]
    async fn test_file_repository_put_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path());
        let assessment = test_assessment("Acme");

        repo.put(&assessment).await.unwrap();

        let loaded = repo.get(&assessment.id).await.unwrap().unwrap();
        assert_eq!(loaded, assessment);
        assert!(repo.file_path(&assessment.id).exists());
    }

    #[tokio::test]
    async fn test_file_repository_get_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path());

        assert!(repo.get(&AssessmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_repository_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path().join("nested/assessments"));

        repo.put(&test_assessment("Acme")).await.unwrap();
        assert!(repo.base_path().exists());
    }

    #[tokio::test]
    async fn test_file_repository_list_orders_and_skips_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path());

        let mut older = test_assessment("Older");
        older.updated_at = Timestamp::from_datetime(Utc::now() - Duration::days(1));
        let newer = test_assessment("Newer");
        repo.put(&older).await.unwrap();
        repo.put(&newer).await.unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(temp_dir.path().join("broken.json"), "{").unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.client_name)
            .collect();
        assert_eq!(names, vec!["Newer".to_string(), "Older".to_string()]);
    }

    #[tokio::test]
    async fn test_file_repository_list_without_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path().join("missing"));

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_repository_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path());
        let assessment = test_assessment("Acme");
        repo.put(&assessment).await.unwrap();

        repo.delete(&assessment.id).await.unwrap();
        assert!(repo.get(&assessment.id).await.unwrap().is_none());

        let err = repo.delete(&assessment.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }

    #[tokio::test]
    async fn test_file_repository_corrupt_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileAssessmentRepository::new(temp_dir.path());
        let id = AssessmentId::new();
        std::fs::write(repo.file_path(&id), "not json").unwrap();

        let err = repo.get(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
    }
}
