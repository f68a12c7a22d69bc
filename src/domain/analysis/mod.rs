//! Analysis Module - Pure domain services turning answers into findings.
//!
//! Every component is a stateless function over domain values. Nothing
//! here performs I/O or mutates its inputs, so no ports are involved.
//!
//! # Components
//!
//! - `AxisAggregator` - Weighted maturity score per axis plus aggregate
//! - `NumericSignalExtractor` - First numeric answer for a metric key
//! - `PainSignalCalculator` - Weekly time and cost losses with severity
//! - `RoiProjector` - Weekly / monthly / yearly savings projection
//! - `DnaClassifier` - Categorical labels for four key axes
//! - `RiskDeriver` - Ordered rule list producing the risk register
//! - `QuickWinGenerator` / `AiOpportunityGenerator` - Recommendation rules
//! - `standard_backlog` - Fixed improvement backlog
//! - `AnalysisEngine` - Runs all of the above into an `AnalysisResult`

mod axis_aggregator;
mod backlog;
mod dna_classifier;
mod engine;
mod numeric_signals;
mod pain_signals;
mod recommendations;
mod result;
mod risk_deriver;
mod roi_projector;
mod rules;

#[cfg(test)]
mod test_support;

pub use axis_aggregator::{AxisAggregator, AxisScore, AxisScores};
pub use backlog::{ready_items, standard_backlog, unresolved_prerequisites, BacklogItem, InitiativeSize};
pub use dna_classifier::{
    DnaClassifier, DnaProfile, DnaTrait, MaturityTier, MIDDLE_TIER_THRESHOLD, NEUTRAL_AXIS_SCORE,
    TOP_TIER_THRESHOLD,
};
pub use engine::AnalysisEngine;
pub use numeric_signals::NumericSignalExtractor;
pub use pain_signals::{
    PainFigures, PainInputs, PainSignal, PainSignalCalculator, Severity, SeverityThresholds,
    COMPLIANCE_HOURS_THRESHOLDS, DEFAULT_COMPLIANCE_HOURS_MONTHLY,
    DEFAULT_DUPLICATE_ENTRIES_PER_DAY, DEFAULT_HOURS_TO_PREPARE_CLAIM,
    DEFAULT_REPORTING_HOURS_PER_DAY, DEFAULT_REWORK_PCT, DUPLICATE_COST_THRESHOLDS,
    HOURS_LOST_THRESHOLDS, HOURS_PER_DUPLICATE_ENTRY, HOURS_PER_WORKDAY,
    REPORTING_COST_THRESHOLDS, REWORK_COST_THRESHOLDS,
};
pub use recommendations::{AiOpportunityGenerator, QuickWinGenerator, Recommendation};
pub use result::AnalysisResult;
pub use risk_deriver::{RiskDeriver, RiskItem, RiskLevel, HIGH_REWORK_PCT};
pub use roi_projector::{
    RoiProjection, RoiProjector, ESTIMATE_DISCLAIMER, WEEKS_PER_MONTH, WEEKS_PER_YEAR,
};
pub use rules::{RuleContext, WEAK_AXIS_THRESHOLD};

/// Formats a number for human-readable text.
///
/// Rounds to four decimals first so float noise such as
/// `35.00000000000001` prints as `35`. Whole numbers print without a
/// fractional part.
pub(crate) fn display_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}
