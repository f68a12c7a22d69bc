//! AnalyzeAssessmentHandler - Query handler running the analysis engine.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{AnalysisEngine, AnalysisResult};
use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

/// Query to analyze a stored assessment.
#[derive(Debug, Clone)]
pub struct AnalyzeAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler that loads an assessment and runs every analysis stage.
///
/// The result is computed on each call and never stored.
pub struct AnalyzeAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    catalog: Arc<QuestionCatalog>,
}

impl AnalyzeAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(&self, query: AnalyzeAssessmentQuery) -> Result<AnalysisResult, DomainError> {
        let assessment = self
            .repository
            .get(&query.assessment_id)
            .await?
            .ok_or_else(|| DomainError::assessment_not_found(query.assessment_id))?;

        // Stored records bypass add_respondent
        assessment.check_invariants()?;

        let result = AnalysisEngine::new(&self.catalog).analyze(&assessment);

        info!(
            assessment_id = %assessment.id,
            aggregate_score = result.aggregate_score,
            yearly_savings = result.roi.yearly_savings,
            risks = result.risks.len(),
            "assessment analyzed"
        );

        Ok(result)
    }
}
