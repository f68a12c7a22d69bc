//! DNA Classifier - Categorical maturity labels for four key axes.

use serde::{Deserialize, Serialize};

use super::AxisScores;
use crate::domain::catalog::Axis;

/// Score assumed for an axis without answers.
pub const NEUTRAL_AXIS_SCORE: f64 = 2.5;

/// Minimum score for the top label.
pub const TOP_TIER_THRESHOLD: f64 = 4.0;

/// Minimum score for the middle label.
pub const MIDDLE_TIER_THRESHOLD: f64 = 3.0;

/// Three-level maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    Bottom,
    Middle,
    Top,
}

impl MaturityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= TOP_TIER_THRESHOLD {
            MaturityTier::Top
        } else if score >= MIDDLE_TIER_THRESHOLD {
            MaturityTier::Middle
        } else {
            MaturityTier::Bottom
        }
    }
}

struct TierLabels {
    top: &'static str,
    middle: &'static str,
    bottom: &'static str,
}

impl TierLabels {
    fn for_tier(&self, tier: MaturityTier) -> &'static str {
        match tier {
            MaturityTier::Top => self.top,
            MaturityTier::Middle => self.middle,
            MaturityTier::Bottom => self.bottom,
        }
    }
}

const DECISION_LABELS: TierLabels = TierLabels {
    top: "Data-Driven",
    middle: "Emerging",
    bottom: "Reactive",
};

const DATA_LABELS: TierLabels = TierLabels {
    top: "Unified",
    middle: "Partial",
    bottom: "Fragmented",
};

const FINANCIAL_LABELS: TierLabels = TierLabels {
    top: "High Visibility",
    middle: "Moderate",
    bottom: "Low Visibility",
};

const GOVERNANCE_LABELS: TierLabels = TierLabels {
    top: "Controlled",
    middle: "Developing",
    bottom: "High Risk",
};

/// One classified axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaTrait {
    pub axis: Axis,
    /// Score used for classification, after neutral substitution.
    pub score: f64,
    pub tier: MaturityTier,
    pub label: String,
}

/// Maturity "DNA" of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaProfile {
    pub decision: DnaTrait,
    pub data: DnaTrait,
    pub financial: DnaTrait,
    pub governance: DnaTrait,
}

/// DNA classification.
pub struct DnaClassifier;

impl DnaClassifier {
    /// Classifies Decision, DataFlow, Finance and Governance.
    ///
    /// An axis with no answered questions is classified as if it scored
    /// [`NEUTRAL_AXIS_SCORE`].
    pub fn classify(scores: &AxisScores) -> DnaProfile {
        DnaProfile {
            decision: Self::classify_axis(scores, Axis::Decision, &DECISION_LABELS),
            data: Self::classify_axis(scores, Axis::DataFlow, &DATA_LABELS),
            financial: Self::classify_axis(scores, Axis::Finance, &FINANCIAL_LABELS),
            governance: Self::classify_axis(scores, Axis::Governance, &GOVERNANCE_LABELS),
        }
    }

    fn classify_axis(scores: &AxisScores, axis: Axis, labels: &TierLabels) -> DnaTrait {
        let score = scores.effective(axis, NEUTRAL_AXIS_SCORE);
        let tier = MaturityTier::from_score(score);
        DnaTrait {
            axis,
            score,
            tier,
            label: labels.for_tier(tier).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_support::{assessment_with, catalog};
    use crate::domain::analysis::AxisAggregator;
    use crate::domain::assessment::Answer;
    use crate::domain::catalog::Role;

    fn classify(answers: Vec<Answer>) -> DnaProfile {
        let assessment = assessment_with(vec![(Role::Manager, answers)]);
        DnaClassifier::classify(&AxisAggregator::compute(&assessment, &catalog()))
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(MaturityTier::from_score(4.0), MaturityTier::Top);
        assert_eq!(MaturityTier::from_score(3.99), MaturityTier::Middle);
        assert_eq!(MaturityTier::from_score(3.0), MaturityTier::Middle);
        assert_eq!(MaturityTier::from_score(2.99), MaturityTier::Bottom);
    }

    #[test]
    fn labels_follow_axis_scores() {
        let profile = classify(vec![
            Answer::choice("dec_a", "d"),
            Answer::choice("data_a", "c"),
            Answer::choice("gov_a", "a"),
        ]);

        assert_eq!(profile.decision.label, "Data-Driven");
        assert_eq!(profile.data.label, "Partial");
        assert_eq!(profile.governance.label, "High Risk");
    }

    #[test]
    fn unanswered_axis_uses_neutral_score() {
        let profile = classify(vec![]);

        assert_eq!(profile.financial.score, NEUTRAL_AXIS_SCORE);
        assert_eq!(profile.financial.tier, MaturityTier::Bottom);
        assert_eq!(profile.financial.label, "Low Visibility");
        assert_eq!(profile.decision.label, "Reactive");
        assert_eq!(profile.data.label, "Fragmented");
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MaturityTier::Top).unwrap(), "\"top\"");
    }
}
