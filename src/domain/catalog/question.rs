//! Question definitions as supplied by the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Axis, Role};
use crate::domain::foundation::OptionScore;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option; the only kind that carries a maturity score.
    Single,
    /// Any number of options.
    Multi,
    /// A number, optionally tagged with a [`NumericSignalKey`].
    Numeric,
    /// Free text.
    Text,
}

impl QuestionKind {
    /// Returns true for single- and multi-choice questions.
    pub fn is_choice(&self) -> bool {
        matches!(self, QuestionKind::Single | QuestionKind::Multi)
    }
}

/// Operational metric measured by a numeric question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericSignalKey {
    ReportingHoursPerDay,
    DuplicateEntriesPerDay,
    ReworkPct,
    HoursToPrepareClaim,
    HoursComplianceMonthly,
    DaysToCloseVO,
    ActiveProjectsCount,
    ComplianceReportingHrsWeek,
    DecisionLatencyDays,
    OnTimeDeliveryPct,
    MaterialRequestResponseHrs,
}

impl NumericSignalKey {
    /// Returns the key as written in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericSignalKey::ReportingHoursPerDay => "reportingHoursPerDay",
            NumericSignalKey::DuplicateEntriesPerDay => "duplicateEntriesPerDay",
            NumericSignalKey::ReworkPct => "reworkPct",
            NumericSignalKey::HoursToPrepareClaim => "hoursToPrepareClaim",
            NumericSignalKey::HoursComplianceMonthly => "hoursComplianceMonthly",
            NumericSignalKey::DaysToCloseVO => "daysToCloseVO",
            NumericSignalKey::ActiveProjectsCount => "activeProjectsCount",
            NumericSignalKey::ComplianceReportingHrsWeek => "complianceReportingHrsWeek",
            NumericSignalKey::DecisionLatencyDays => "decisionLatencyDays",
            NumericSignalKey::OnTimeDeliveryPct => "onTimeDeliveryPct",
            NumericSignalKey::MaterialRequestResponseHrs => "materialRequestResponseHrs",
        }
    }
}

impl fmt::Display for NumericSignalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable answer of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Token stored in the answer when this option is picked.
    pub value: String,
    pub score: OptionScore,
    pub label_en: String,
    pub label_ar: String,
}

/// A catalog question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub roles: Vec<Role>,
    pub axis: Axis,
    pub kind: QuestionKind,
    /// Relevance multiplier used by the axis aggregator.
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub text_en: String,
    pub text_ar: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_key: Option<NumericSignalKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    /// Finds the option whose token matches `token`.
    pub fn option(&self, token: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == token)
    }

    /// Returns true if respondents in `role` are asked this question.
    pub fn applies_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if this question measures the given metric.
    pub fn measures(&self, key: NumericSignalKey) -> bool {
        self.kind == QuestionKind::Numeric && self.numeric_key == Some(key)
    }
}
