//! Analysis Engine - Runs every stage over one assessment.

use tracing::debug;

use super::axis_aggregator::AxisAggregator;
use super::backlog::standard_backlog;
use super::dna_classifier::DnaClassifier;
use super::pain_signals::{PainInputs, PainSignalCalculator};
use super::recommendations::{AiOpportunityGenerator, QuickWinGenerator};
use super::result::AnalysisResult;
use super::risk_deriver::RiskDeriver;
use super::roi_projector::RoiProjector;
use super::rules::RuleContext;
use crate::domain::assessment::Assessment;
use crate::domain::catalog::QuestionCatalog;

/// Stateless analysis pipeline bound to a question catalog.
///
/// # Algorithm
///
/// 1. Aggregate weighted single-choice scores per axis
/// 2. Resolve the five pain metrics (answer or default)
/// 3. Compute pain figures and signals, then project ROI
/// 4. Classify DNA and evaluate the risk, quick-win and AI rule lists
/// 5. Attach the static backlog
///
/// # Edge Cases
///
/// - Answers to unknown question ids are ignored
/// - Unanswered axes score 0 and are left out of the aggregate
/// - The input assessment is never modified
#[derive(Debug, Clone, Copy)]
pub struct AnalysisEngine<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn analyze(&self, assessment: &Assessment) -> AnalysisResult {
        let axis_scores = AxisAggregator::compute(assessment, self.catalog);
        let aggregate_score = axis_scores.aggregate();
        debug!(
            assessment_id = %assessment.id,
            answered_axes = axis_scores.iter().filter(|s| s.is_answered()).count(),
            aggregate_score,
            "axis scores computed"
        );

        let roi_settings = &assessment.roi_settings;
        let pain_inputs = PainInputs::resolve(assessment, self.catalog);
        let figures = PainSignalCalculator::figures(&pain_inputs, roi_settings);
        let pain_signals = PainSignalCalculator::signals(&pain_inputs, roi_settings, &figures);
        let roi = RoiProjector::project(&figures, &pain_inputs, roi_settings);
        debug!(
            assessment_id = %assessment.id,
            weekly_hours_lost = figures.weekly_hours_lost,
            weekly_savings = roi.weekly_savings,
            "pain signals projected"
        );

        let dna = DnaClassifier::classify(&axis_scores);
        let context = RuleContext::new(&axis_scores, &pain_inputs);
        let risks = RiskDeriver::derive(&context);
        let quick_wins = QuickWinGenerator::generate(&context);
        let ai_opportunities = AiOpportunityGenerator::generate(&context);
        debug!(
            assessment_id = %assessment.id,
            risks = risks.len(),
            quick_wins = quick_wins.len(),
            ai_opportunities = ai_opportunities.len(),
            "rules evaluated"
        );

        AnalysisResult {
            assessment_id: assessment.id,
            axis_scores: axis_scores.into_vec(),
            aggregate_score,
            pain_inputs,
            pain_signals,
            roi,
            risks,
            backlog: standard_backlog(),
            quick_wins,
            ai_opportunities,
            dna,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::test_support::{assessment_with, catalog};
    use crate::domain::assessment::Answer;
    use crate::domain::catalog::{Axis, Role};

    #[test]
    fn empty_assessment_uses_defaults_everywhere() {
        let catalog = catalog();
        let result = AnalysisEngine::new(&catalog).analyze(&assessment_with(vec![]));

        assert_eq!(result.axis_scores.len(), Axis::ALL.len());
        assert!(result.axis_scores.iter().all(|s| s.score == 0.0));
        assert_eq!(result.aggregate_score, 0.0);
        assert_eq!(result.pain_inputs, PainInputs::default());
        assert_eq!(result.pain_signals.len(), 5);
        assert_eq!(result.backlog.len(), 8);
        // Neutral 2.5 makes every core axis weak.
        let ids: Vec<&str> = result.risks.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3", "r5", "r6"]);
    }

    #[test]
    fn weighted_governance_example() {
        let catalog = catalog();
        let assessment = assessment_with(vec![(
            Role::Manager,
            vec![Answer::choice("gov_a", "c"), Answer::choice("gov_b", "d")],
        )]);

        let result = AnalysisEngine::new(&catalog).analyze(&assessment);
        let governance = result
            .axis_scores
            .iter()
            .find(|s| s.axis == Axis::Governance)
            .unwrap();

        // (3×1 + 5×2) / 3
        assert!((governance.score - 13.0 / 3.0).abs() < 1e-9);
        assert!((result.aggregate_score - 13.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.dna.governance.label, "Controlled");
    }

    #[test]
    fn analysis_does_not_modify_the_assessment() {
        let catalog = catalog();
        let assessment = assessment_with(vec![(
            Role::Engineer,
            vec![Answer::number("reporting", 3.0), Answer::choice("data_a", "b")],
        )]);
        let before = assessment.clone();

        let engine = AnalysisEngine::new(&catalog);
        let first = engine.analyze(&assessment);
        let second = engine.analyze(&assessment);

        assert_eq!(assessment, before);
        assert_eq!(first, second);
    }

    #[test]
    fn result_survives_json_round_trip() {
        let catalog = catalog();
        let assessment = assessment_with(vec![(
            Role::Operations,
            vec![Answer::number("rework", 12.0)],
        )]);
        let result = AnalysisEngine::new(&catalog).analyze(&assessment);

        let json = result.to_json_pretty().unwrap();
        let parsed = AnalysisResult::from_json(&json).unwrap();
        assert_eq!(parsed.assessment_id, result.assessment_id);
        assert_eq!(parsed.risks, result.risks);
        assert_eq!(parsed.backlog, result.backlog);
        assert_eq!(parsed.roi.yearly_savings, result.roi.yearly_savings);
        assert!(json.contains("\"title_ar\""));
        assert!(result.to_yaml().unwrap().contains("High Rework Rate (12%)"));
    }
}
