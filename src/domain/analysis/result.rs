//! The complete output of one analysis run.

use serde::{Deserialize, Serialize};

use super::axis_aggregator::AxisScore;
use super::backlog::BacklogItem;
use super::dna_classifier::DnaProfile;
use super::pain_signals::{PainInputs, PainSignal};
use super::recommendations::Recommendation;
use super::risk_deriver::RiskItem;
use super::roi_projector::RoiProjection;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Analysis of a single assessment.
///
/// Built fresh on every run and never mutated afterwards. Numbers
/// serialize as numbers and every bilingual text keeps separate
/// `_en` / `_ar` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub assessment_id: AssessmentId,
    /// All eight axes in fixed order.
    pub axis_scores: Vec<AxisScore>,
    /// Mean over answered axes, 0 when none were answered.
    pub aggregate_score: f64,
    /// Metric values after default substitution.
    pub pain_inputs: PainInputs,
    pub pain_signals: Vec<PainSignal>,
    pub roi: RoiProjection,
    pub risks: Vec<RiskItem>,
    pub backlog: Vec<BacklogItem>,
    pub quick_wins: Vec<Recommendation>,
    pub ai_opportunities: Vec<Recommendation>,
    pub dna: DnaProfile,
}

impl AnalysisResult {
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| serialization_error("json", e))
    }

    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self).map_err(|e| serialization_error("yaml", e))
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| serialization_error("json", e))
    }
}

fn serialization_error(format: &str, error: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::SerializationError,
        format!("Failed to convert analysis result: {}", error),
    )
    .with_detail("format", format)
}
