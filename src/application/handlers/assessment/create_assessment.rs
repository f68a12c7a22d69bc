//! CreateAssessmentHandler - Command handler for starting a new assessment.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{Assessment, CompanySize, RoiSettings};
use crate::domain::foundation::DomainError;
use crate::ports::AssessmentRepository;

/// Command to create a new assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub client_name: String,
    pub assessor_name: String,
    pub company_size: CompanySize,
    pub project_name: Option<String>,
    /// Overrides the handler's configured defaults.
    pub roi_settings: Option<RoiSettings>,
}

/// Result of successful assessment creation.
#[derive(Debug, Clone)]
pub struct CreateAssessmentResult {
    pub assessment: Assessment,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    default_roi: RoiSettings,
}

impl CreateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, default_roi: RoiSettings) -> Self {
        Self {
            repository,
            default_roi,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAssessmentCommand,
    ) -> Result<CreateAssessmentResult, DomainError> {
        // 1. Create draft aggregate
        let mut assessment = Assessment::new(cmd.client_name, cmd.assessor_name, cmd.company_size)?;
        if let Some(project_name) = cmd.project_name {
            assessment = assessment.with_project_name(project_name);
        }

        // 2. Apply ROI assumptions
        let roi = cmd.roi_settings.unwrap_or_else(|| self.default_roi.clone());
        assessment.set_roi_settings(roi)?;

        // 3. Persist
        self.repository.put(&assessment).await?;

        info!(
            assessment_id = %assessment.id,
            client = %assessment.client_name,
            "assessment created"
        );

        Ok(CreateAssessmentResult { assessment })
    }
}
