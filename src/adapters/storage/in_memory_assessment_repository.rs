//! In-Memory Assessment Repository Adapter
//!
//! Stores assessments in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.assessments.write().await.clear();
    }

    /// Get the number of stored assessments
    pub async fn count(&self) -> usize {
        self.assessments.read().await.len()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self.assessments.read().await.get(id).cloned())
    }

    async fn put(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        assessments.insert(assessment.id, assessment.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Assessment>, DomainError> {
        let mut all: Vec<Assessment> = self.assessments.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.assessments
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::assessment_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::CompanySize;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use chrono::{Duration, Utc};

    fn test_assessment(client: &str) -> Assessment {
        Assessment::new(client, "Assessor", CompanySize::Medium).unwrap()
    }

    #[tokio::test]
    async fn test_memory_repository_put_and_get() {
        let repo = InMemoryAssessmentRepository::new();
        let assessment = test_assessment("Acme");

        repo.put(&assessment).await.unwrap();

        let loaded = repo.get(&assessment.id).await.unwrap();
        assert_eq!(loaded, Some(assessment));
    }

    #[tokio::test]
    async fn test_memory_repository_get_missing_returns_none() {
        let repo = InMemoryAssessmentRepository::new();
        assert!(repo.get(&AssessmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_repository_put_replaces() {
        let repo = InMemoryAssessmentRepository::new();
        let mut assessment = test_assessment("Acme");
        repo.put(&assessment).await.unwrap();

        assessment.client_name = "Acme Renamed".to_string();
        repo.put(&assessment).await.unwrap();

        assert_eq!(repo.count().await, 1);
        let loaded = repo.get(&assessment.id).await.unwrap().unwrap();
        assert_eq!(loaded.client_name, "Acme Renamed");
    }

    #[tokio::test]
    async fn test_memory_repository_list_most_recent_first() {
        let repo = InMemoryAssessmentRepository::new();
        let mut older = test_assessment("Older");
        older.updated_at = Timestamp::from_datetime(Utc::now() - Duration::hours(2));
        let newer = test_assessment("Newer");

        repo.put(&older).await.unwrap();
        repo.put(&newer).await.unwrap();

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
    async fn test_memory_repository_delete() {
        let repo = InMemoryAssessmentRepository::new();
        let assessment = test_assessment("Acme");
        repo.put(&assessment).await.unwrap();

        repo.delete(&assessment.id).await.unwrap();
        assert_eq!(repo.count().await, 0);

        let err = repo.delete(&assessment.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
    }

    #[tokio::test]
    async fn test_memory_repository_clones_share_state() {
        let repo = InMemoryAssessmentRepository::new();
        let writer = repo.clone();
        let assessment = test_assessment("Acme");
        let id = assessment.id;

        tokio::spawn(async move {
            writer.put(&assessment).await.unwrap();
        })
        .await
        .unwrap();

        assert!(repo.get(&id).await.unwrap().is_some());
        repo.clear().await;
        assert_eq!(repo.count().await, 0);
    }
}
