//! Axis Aggregator - Weighted maturity score per axis.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::assessment::Assessment;
use crate::domain::catalog::{Axis, QuestionCatalog, QuestionKind};

/// Weighted score of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis: Axis,
    pub label_en: String,
    pub label_ar: String,
    /// Weighted mean of option scores, 0 when nothing was answered.
    pub score: f64,
    pub answered_count: u32,
    pub total_weight: f64,
}

impl AxisScore {
    pub fn is_answered(&self) -> bool {
        self.answered_count > 0
    }
}

/// Scores for all eight axes, in [`Axis::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisScores(Vec<AxisScore>);

impl AxisScores {
    /// Score record for an axis.
    pub fn get(&self, axis: Axis) -> Option<&AxisScore> {
        self.0.iter().find(|s| s.axis == axis)
    }

    /// The computed score; 0 for an axis without answers.
    pub fn score(&self, axis: Axis) -> f64 {
        self.get(axis).map_or(0.0, |s| s.score)
    }

    /// The axis score when the axis has answers, otherwise `fallback`.
    pub fn effective(&self, axis: Axis, fallback: f64) -> f64 {
        match self.get(axis) {
            Some(score) if score.is_answered() => score.score,
            _ => fallback,
        }
    }

    /// Mean score over answered axes; 0 when no axis has answers.
    pub fn aggregate(&self) -> f64 {
        let answered: Vec<f64> = self
            .0
            .iter()
            .filter(|s| s.is_answered())
            .map(|s| s.score)
            .collect();

        if answered.is_empty() {
            return 0.0;
        }
        answered.iter().sum::<f64>() / answered.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisScore> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<AxisScore> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    weighted_sum: f64,
    total_weight: f64,
    count: u32,
}

/// Axis score computation.
pub struct AxisAggregator;

impl AxisAggregator {
    /// Computes per-axis weighted scores from every respondent's answers.
    ///
    /// # Algorithm
    /// For each non-skipped single-choice answer whose token matches an option:
    /// `weighted_sum += score * weight`, `total_weight += weight`, `count += 1`.
    /// Axis score = `weighted_sum / total_weight`.
    ///
    /// # Edge Cases
    /// - Multi-choice, numeric and text answers: Ignored
    /// - Answer to a question missing from the catalog: Ignored
    /// - Token matching no option: Ignored
    /// - Axis without answers: Score 0, `answered_count` 0
    pub fn compute(assessment: &Assessment, catalog: &QuestionCatalog) -> AxisScores {
        let mut totals = [Accumulator::default(); Axis::ALL.len()];

        let answers = assessment
            .respondents
            .iter()
            .flat_map(|r| r.answers.iter());

        for answer in answers {
            let Some(value) = answer.effective_value() else {
                continue;
            };
            let Some(question) = catalog.get(&answer.question_id) else {
                warn!(question_id = %answer.question_id, "Answer references unknown question");
                continue;
            };
            if question.kind != QuestionKind::Single {
                continue;
            }
            let Some(option) = value.as_text().and_then(|token| question.option(token)) else {
                continue;
            };

            let slot = &mut totals[question.axis.index()];
            slot.weighted_sum += option.score.as_f64() * question.weight;
            slot.total_weight += question.weight;
            slot.count += 1;
        }

        AxisScores(
            Axis::ALL
                .iter()
                .zip(totals.iter())
                .map(|(&axis, totals)| AxisScore {
                    axis,
                    label_en: axis.label_en().to_string(),
                    label_ar: axis.label_ar().to_string(),
                    score: if totals.total_weight > 0.0 {
                        totals.weighted_sum / totals.total_weight
                    } else {
                        0.0
                    },
                    answered_count: totals.count,
                    total_weight: totals.total_weight,
                })
                .collect(),
        )
    }
}
