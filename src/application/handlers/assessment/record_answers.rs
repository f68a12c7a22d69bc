//! RecordAnswersHandler - Command handler for storing a respondent's answers.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{Answer, Assessment, Respondent};
use crate::domain::catalog::Role;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::AssessmentRepository;

/// Command to upsert answers for the respondent of a role.
#[derive(Debug, Clone)]
pub struct RecordAnswersCommand {
    pub assessment_id: AssessmentId,
    pub role: Role,
    /// Used when the role has no respondent yet; an existing respondent
    /// keeps their name.
    pub respondent_name: String,
    pub answers: Vec<Answer>,
    /// Marks the respondent's interview as finished.
    pub complete_respondent: bool,
}

/// Result of recording answers.
#[derive(Debug, Clone)]
pub struct RecordAnswersResult {
    pub assessment: Assessment,
    /// Number of answers stored for the role after the update.
    pub answer_count: usize,
}

/// Handler for recording answers.
pub struct RecordAnswersHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl RecordAnswersHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordAnswersCommand) -> Result<RecordAnswersResult, DomainError> {
        // 1. Load assessment
        let mut assessment = self
            .repository
            .get(&cmd.assessment_id)
            .await?
            .ok_or_else(|| DomainError::assessment_not_found(cmd.assessment_id))?;

        // 2. Find or add the respondent for the role
        if assessment.respondent_for(cmd.role).is_none() {
            assessment.add_respondent(Respondent::new(cmd.role, cmd.respondent_name))?;
        }

        let answer_count = match assessment.respondent_for_mut(cmd.role) {
            Some(respondent) => {
                for answer in cmd.answers {
                    respondent.record(answer);
                }
                if cmd.complete_respondent {
                    respondent.complete();
                }
                respondent.answers.len()
            }
            None => 0,
        };
        assessment.touch();

        // 3. Persist
        self.repository.put(&assessment).await?;

        info!(
            assessment_id = %assessment.id,
            role = %cmd.role,
            answer_count,
            "answers recorded"
        );

        Ok(RecordAnswersResult {
            assessment,
            answer_count,
        })
    }
}
