//! Facts the rule cascades (risks, quick wins, AI opportunities) test against.

use super::{AxisScores, PainInputs};
use crate::domain::catalog::Axis;

/// Score below which an axis is considered weak.
pub const WEAK_AXIS_THRESHOLD: f64 = 3.0;

/// Computed axis scores and resolved metrics for one analysis.
///
/// Rules see the same scores the result reports, so an axis without answers
/// counts as 0 here. Only DNA classification substitutes a neutral score.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleContext {
    pub decision: f64,
    pub data_flow: f64,
    pub finance: f64,
    pub governance: f64,
    pub ai_readiness: f64,
    pub inputs: PainInputs,
}

impl RuleContext {
    pub fn new(scores: &AxisScores, inputs: &PainInputs) -> Self {
        Self {
            decision: scores.score(Axis::Decision),
            data_flow: scores.score(Axis::DataFlow),
            finance: scores.score(Axis::Finance),
            governance: scores.score(Axis::Governance),
            ai_readiness: scores.score(Axis::AIReadiness),
            inputs: inputs.clone(),
        }
    }

    pub fn governance_weak(&self) -> bool {
        self.governance < WEAK_AXIS_THRESHOLD
    }

    pub fn data_flow_weak(&self) -> bool {
        self.data_flow < WEAK_AXIS_THRESHOLD
    }

    pub fn decision_weak(&self) -> bool {
        self.decision < WEAK_AXIS_THRESHOLD
    }

    pub fn finance_weak(&self) -> bool {
        self.finance < WEAK_AXIS_THRESHOLD
    }
}
