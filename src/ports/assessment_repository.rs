//! Assessment repository port.
//!
//! The persistence collaborator the application layer is handed. The
//! analysis engine never touches it; handlers load an assessment and pass
//! it to the engine explicitly.

use async_trait::async_trait;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Insert or replace an assessment.
    ///
    /// Stores the record as given; `updated_at` is the caller's concern.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn put(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// All stored assessments, most recently updated first.
    async fn list(&self) -> Result<Vec<Assessment>, DomainError>;

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
