//! Assessment aggregate - client metadata, respondents and ROI assumptions.

use serde::{Deserialize, Serialize};

use super::{Respondent, RoiSettings};
use crate::domain::catalog::Role;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, ValidationError};

/// Headcount band of the assessed company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "<50")]
    Small,
    #[serde(rename = "50-200")]
    Medium,
    #[serde(rename = "200+")]
    Large,
}

/// Lifecycle status of an assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentStatus {
    #[default]
    Draft,
    Completed,
}

/// A questionnaire run for one client.
///
/// # Invariants
///
/// - At most one respondent per role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub assessor_name: String,
    pub company_size: CompanySize,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub respondents: Vec<Respondent>,
    #[serde(default)]
    pub roi_settings: RoiSettings,
    #[serde(default)]
    pub status: AssessmentStatus,
}

impl Assessment {
    /// Creates a draft assessment with default ROI settings.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if client or assessor name is blank
    pub fn new(
        client_name: impl Into<String>,
        assessor_name: impl Into<String>,
        company_size: CompanySize,
    ) -> Result<Self, ValidationError> {
        let client_name = client_name.into();
        let assessor_name = assessor_name.into();

        if client_name.trim().is_empty() {
            return Err(ValidationError::empty_field("client_name"));
        }
        if assessor_name.trim().is_empty() {
            return Err(ValidationError::empty_field("assessor_name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: AssessmentId::new(),
            client_name,
            project_name: None,
            assessor_name,
            company_size,
            created_at: now,
            updated_at: now,
            respondents: Vec::new(),
            roi_settings: RoiSettings::default(),
            status: AssessmentStatus::Draft,
        })
    }

    /// Sets the optional project name.
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    /// Replaces the ROI assumptions after validating them.
    pub fn set_roi_settings(&mut self, settings: RoiSettings) -> Result<(), ValidationError> {
        settings.validate()?;
        self.roi_settings = settings;
        self.touch();
        Ok(())
    }

    /// Adds a respondent.
    ///
    /// # Errors
    ///
    /// - `DuplicateRespondentRole` if the role already has a respondent
    pub fn add_respondent(&mut self, respondent: Respondent) -> Result<(), DomainError> {
        if self.respondent_for(respondent.role).is_some() {
            return Err(duplicate_role(respondent.role));
        }
        self.respondents.push(respondent);
        self.touch();
        Ok(())
    }

    /// The respondent answering for `role`, if any.
    pub fn respondent_for(&self, role: Role) -> Option<&Respondent> {
        self.respondents.iter().find(|r| r.role == role)
    }

    /// Mutable access to the respondent answering for `role`.
    pub fn respondent_for_mut(&mut self, role: Role) -> Option<&mut Respondent> {
        self.respondents.iter_mut().find(|r| r.role == role)
    }

    /// Re-checks invariants on records that did not go through `add_respondent`,
    /// such as ones read back from storage.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        for (position, respondent) in self.respondents.iter().enumerate() {
            if self.respondents[..position]
                .iter()
                .any(|earlier| earlier.role == respondent.role)
            {
                return Err(duplicate_role(respondent.role));
            }
        }
        Ok(())
    }

    /// Marks the assessment as completed.
    pub fn complete(&mut self) {
        self.status = AssessmentStatus::Completed;
        self.touch();
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }

    /// Bumps `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

fn duplicate_role(role: Role) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateRespondentRole,
        format!("A respondent for role {} already exists", role),
    )
    .with_detail("role", role.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Assessment {
        Assessment::new("United Construction", "Assessor", CompanySize::Medium).unwrap()
    }

    #[test]
    fn new_assessment_is_draft_with_defaults() {
        let assessment = draft();
        assert_eq!(assessment.status, AssessmentStatus::Draft);
        assert!(assessment.respondents.is_empty());
        assert_eq!(assessment.roi_settings, RoiSettings::default());
        assert_eq!(assessment.created_at, assessment.updated_at);
    }

    #[test]
    fn new_rejects_blank_client_name() {
        let result = Assessment::new("  ", "Assessor", CompanySize::Small);
        assert!(matches!(result, Err(ValidationError::EmptyField { field }) if field == "client_name"));
    }

    #[test]
    fn new_rejects_blank_assessor_name() {
        let result = Assessment::new("Client", "", CompanySize::Small);
        assert!(result.is_err());
    }

    #[test]
    fn add_respondent_rejects_second_respondent_for_role() {
        let mut assessment = draft();
        assessment.add_respondent(Respondent::new(Role::Manager, "First")).unwrap();

        let err = assessment
            .add_respondent(Respondent::new(Role::Manager, "Second"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateRespondentRole);
        assert_eq!(assessment.respondents.len(), 1);
    }

    #[test]
    fn check_invariants_detects_duplicates_from_storage() {
        let mut assessment = draft();
        assessment.respondents.push(Respondent::new(Role::Finance, "A"));
        assessment.respondents.push(Respondent::new(Role::Engineer, "B"));
        assert!(assessment.check_invariants().is_ok());

        assessment.respondents.push(Respondent::new(Role::Finance, "C"));
        assert!(assessment.check_invariants().is_err());
    }

    #[test]
    fn set_roi_settings_validates() {
        let mut assessment = draft();
        let invalid = RoiSettings {
            saving_rate: 2.0,
            ..RoiSettings::default()
        };
        assert!(assessment.set_roi_settings(invalid).is_err());
        assert_eq!(assessment.roi_settings, RoiSettings::default());
    }

    #[test]
    fn complete_sets_status() {
        let mut assessment = draft();
        assessment.complete();
        assert!(assessment.is_completed());
    }

    #[test]
    fn company_size_uses_band_labels() {
        assert_eq!(serde_json::to_string(&CompanySize::Small).unwrap(), "\"<50\"");
        assert_eq!(serde_json::to_string(&CompanySize::Large).unwrap(), "\"200+\"");
    }

    #[test]
    fn assessment_round_trips_through_json() {
        let mut assessment = draft().with_project_name("Digital transformation");
        assessment.add_respondent(Respondent::new(Role::Operations, "Khaled")).unwrap();

        let json = serde_json::to_string(&assessment).unwrap();
        let restored: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, assessment);
    }
}
