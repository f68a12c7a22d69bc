//! ROI Projector - Savings projections from pain-signal costs.

use serde::{Deserialize, Serialize};

use super::display_number;
use super::pain_signals::{PainFigures, PainInputs};
use crate::domain::assessment::RoiSettings;

/// Average number of weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Disclaimer appended to every assumption list.
pub const ESTIMATE_DISCLAIMER: &str = "These are estimates — actual results may vary ±30%";

/// Savings projection with the assumptions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub weekly_hours_lost: f64,
    /// Reporting + duplicate + rework cost per week.
    pub weekly_cost_lost: f64,
    pub weekly_savings: i64,
    pub monthly_savings: i64,
    pub yearly_savings: i64,
    pub currency: String,
    pub assumptions: Vec<String>,
}

/// ROI projection.
pub struct RoiProjector;

impl RoiProjector {
    /// Projects savings.
    ///
    /// weekly savings = total weekly loss × saving rate × overhead multiplier;
    /// monthly = weekly × 4.33; yearly = weekly × 52. Each projection is
    /// rounded to the nearest currency unit from the unrounded weekly figure.
    pub fn project(figures: &PainFigures, inputs: &PainInputs, roi: &RoiSettings) -> RoiProjection {
        let weekly_cost_lost = figures.total_weekly_cost();
        let weekly_savings = weekly_cost_lost * roi.saving_rate * roi.overhead_multiplier;

        RoiProjection {
            weekly_hours_lost: figures.weekly_hours_lost,
            weekly_cost_lost,
            weekly_savings: round_currency(weekly_savings),
            monthly_savings: round_currency(weekly_savings * WEEKS_PER_MONTH),
            yearly_savings: round_currency(weekly_savings * WEEKS_PER_YEAR),
            currency: roi.currency.code().to_string(),
            assumptions: Self::assumptions(inputs, roi),
        }
    }

    fn assumptions(inputs: &PainInputs, roi: &RoiSettings) -> Vec<String> {
        let currency = roi.currency.code();
        vec![
            format!(
                "{} engineers at {} {}/hr",
                roi.engineers_count,
                display_number(roi.hourly_cost),
                currency
            ),
            format!("{} working days/week", roi.working_days_per_week),
            format!(
                "{}% efficiency saving rate",
                display_number(roi.saving_rate * 100.0)
            ),
            format!("{}x overhead multiplier", display_number(roi.overhead_multiplier)),
            format!(
                "Reporting: {} hrs/day, Rework: {}%, Duplicates: {}/day",
                display_number(inputs.reporting_hours_per_day),
                display_number(inputs.rework_pct),
                display_number(inputs.duplicate_entries_per_day)
            ),
            ESTIMATE_DISCLAIMER.to_string(),
        ]
    }
}

fn round_currency(value: f64) -> i64 {
    value.round() as i64
}
