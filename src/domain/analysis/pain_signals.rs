//! Pain Signal Calculator - Time and cost losses derived from numeric answers.

use serde::{Deserialize, Serialize};

use super::numeric_signals::NumericSignalExtractor;
use super::display_number;
use crate::domain::assessment::{Assessment, RoiSettings};
use crate::domain::catalog::{NumericSignalKey, QuestionCatalog};

pub const DEFAULT_REPORTING_HOURS_PER_DAY: f64 = 2.0;
pub const DEFAULT_DUPLICATE_ENTRIES_PER_DAY: f64 = 3.0;
pub const DEFAULT_REWORK_PCT: f64 = 10.0;
pub const DEFAULT_HOURS_TO_PREPARE_CLAIM: f64 = 8.0;
pub const DEFAULT_COMPLIANCE_HOURS_MONTHLY: f64 = 20.0;

/// Hours lost per duplicate data entry (15 minutes).
pub const HOURS_PER_DUPLICATE_ENTRY: f64 = 0.25;

/// Working hours in one engineer day.
pub const HOURS_PER_WORKDAY: f64 = 8.0;

/// Raw metric values feeding the formulas, defaults already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainInputs {
    pub reporting_hours_per_day: f64,
    pub duplicate_entries_per_day: f64,
    pub rework_pct: f64,
    pub hours_to_prepare_claim: f64,
    pub compliance_hours_monthly: f64,
}

impl Default for PainInputs {
    fn default() -> Self {
        Self {
            reporting_hours_per_day: DEFAULT_REPORTING_HOURS_PER_DAY,
            duplicate_entries_per_day: DEFAULT_DUPLICATE_ENTRIES_PER_DAY,
            rework_pct: DEFAULT_REWORK_PCT,
            hours_to_prepare_claim: DEFAULT_HOURS_TO_PREPARE_CLAIM,
            compliance_hours_monthly: DEFAULT_COMPLIANCE_HOURS_MONTHLY,
        }
    }
}

impl PainInputs {
    /// Extracts each metric from the assessment, substituting its default
    /// when no usable answer exists.
    pub fn resolve(assessment: &Assessment, catalog: &QuestionCatalog) -> Self {
        let defaults = Self::default();
        let extract = |key, default| {
            NumericSignalExtractor::extract(assessment, catalog, key).unwrap_or(default)
        };

        Self {
            reporting_hours_per_day: extract(
                NumericSignalKey::ReportingHoursPerDay,
                defaults.reporting_hours_per_day,
            ),
            duplicate_entries_per_day: extract(
                NumericSignalKey::DuplicateEntriesPerDay,
                defaults.duplicate_entries_per_day,
            ),
            rework_pct: extract(NumericSignalKey::ReworkPct, defaults.rework_pct),
            hours_to_prepare_claim: extract(
                NumericSignalKey::HoursToPrepareClaim,
                defaults.hours_to_prepare_claim,
            ),
            compliance_hours_monthly: extract(
                NumericSignalKey::HoursComplianceMonthly,
                defaults.compliance_hours_monthly,
            ),
        }
    }
}

/// Severity tier of a pain signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Strict greater-than cut-offs for one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl SeverityThresholds {
    pub const fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    pub fn classify(&self, value: f64) -> Severity {
        if value > self.high {
            Severity::High
        } else if value > self.medium {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

pub const HOURS_LOST_THRESHOLDS: SeverityThresholds = SeverityThresholds::new(30.0, 15.0);
pub const REPORTING_COST_THRESHOLDS: SeverityThresholds = SeverityThresholds::new(5000.0, 2000.0);
pub const DUPLICATE_COST_THRESHOLDS: SeverityThresholds = SeverityThresholds::new(2000.0, 500.0);
pub const REWORK_COST_THRESHOLDS: SeverityThresholds = SeverityThresholds::new(5000.0, 2000.0);
pub const COMPLIANCE_HOURS_THRESHOLDS: SeverityThresholds = SeverityThresholds::new(40.0, 20.0);

/// A labeled, severity-classified loss figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainSignal {
    pub id: String,
    pub label_en: String,
    pub label_ar: String,
    pub value: f64,
    pub unit: String,
    /// The formula with its literal inputs substituted.
    pub formula: String,
    pub severity: Severity,
}

/// Unrounded weekly figures, used by the ROI projector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PainFigures {
    pub weekly_hours_lost: f64,
    pub weekly_reporting_cost: f64,
    pub weekly_duplicate_cost: f64,
    pub weekly_rework_cost: f64,
    pub monthly_compliance_hours: f64,
}

impl PainFigures {
    /// Monetary weekly loss; compliance hours are not money and stay out.
    pub fn total_weekly_cost(&self) -> f64 {
        self.weekly_reporting_cost + self.weekly_duplicate_cost + self.weekly_rework_cost
    }
}

/// Pain signal formulas.
pub struct PainSignalCalculator;

impl PainSignalCalculator {
    /// Applies the fixed loss formulas.
    ///
    /// - hours lost = reporting h/day × days × engineers
    /// - reporting cost = hours lost × hourly cost
    /// - duplicate cost = duplicates × days × 0.25h × hourly cost
    /// - rework cost = rework% / 100 × hourly cost × days × 8h × engineers
    /// - compliance hours = reported value
    pub fn figures(inputs: &PainInputs, roi: &RoiSettings) -> PainFigures {
        let engineers = f64::from(roi.engineers_count);
        let days = f64::from(roi.working_days_per_week);
        let hourly_cost = roi.hourly_cost;

        let weekly_hours_lost = inputs.reporting_hours_per_day * days * engineers;

        PainFigures {
            weekly_hours_lost,
            weekly_reporting_cost: weekly_hours_lost * hourly_cost,
            weekly_duplicate_cost: inputs.duplicate_entries_per_day
                * days
                * HOURS_PER_DUPLICATE_ENTRY
                * hourly_cost,
            weekly_rework_cost: (inputs.rework_pct / 100.0)
                * hourly_cost
                * days
                * HOURS_PER_WORKDAY
                * engineers,
            monthly_compliance_hours: inputs.compliance_hours_monthly,
        }
    }

    /// Builds the five reported signals in fixed order (`ps1`..`ps5`).
    pub fn signals(inputs: &PainInputs, roi: &RoiSettings, figures: &PainFigures) -> Vec<PainSignal> {
        let currency = roi.currency.code();
        let engineers = roi.engineers_count;
        let days = roi.working_days_per_week;
        let cost = display_number(roi.hourly_cost);

        vec![
            PainSignal {
                id: "ps1".to_string(),
                label_en: "Weekly Reporting Hours Lost".to_string(),
                label_ar: "ساعات التقارير الضائعة أسبوعياً".to_string(),
                value: round_to_tenth(figures.weekly_hours_lost),
                unit: "hrs/week".to_string(),
                formula: format!(
                    "{}h/day × {} days × {} engineers",
                    display_number(inputs.reporting_hours_per_day),
                    days,
                    engineers
                ),
                severity: HOURS_LOST_THRESHOLDS.classify(figures.weekly_hours_lost),
            },
            PainSignal {
                id: "ps2".to_string(),
                label_en: "Weekly Manual Reporting Cost".to_string(),
                label_ar: "تكلفة التقارير اليدوية أسبوعياً".to_string(),
                value: figures.weekly_reporting_cost.round(),
                unit: format!("{}/week", currency),
                formula: format!(
                    "{} hrs × {} {}/hr",
                    display_number(figures.weekly_hours_lost),
                    cost,
                    currency
                ),
                severity: REPORTING_COST_THRESHOLDS.classify(figures.weekly_reporting_cost),
            },
            PainSignal {
                id: "ps3".to_string(),
                label_en: "Weekly Duplicate Entry Cost".to_string(),
                label_ar: "تكلفة تكرار إدخال البيانات أسبوعياً".to_string(),
                value: figures.weekly_duplicate_cost.round(),
                unit: format!("{}/week", currency),
                formula: format!(
                    "{} entries × {} days × {}h × {} {}",
                    display_number(inputs.duplicate_entries_per_day),
                    days,
                    HOURS_PER_DUPLICATE_ENTRY,
                    cost,
                    currency
                ),
                severity: DUPLICATE_COST_THRESHOLDS.classify(figures.weekly_duplicate_cost),
            },
            PainSignal {
                id: "ps4".to_string(),
                label_en: "Weekly Rework Cost".to_string(),
                label_ar: "تكلفة إعادة العمل أسبوعياً".to_string(),
                value: figures.weekly_rework_cost.round(),
                unit: format!("{}/week", currency),
                formula: format!(
                    "{}% rework × {} engineers × {} days × {}h × {} {}",
                    display_number(inputs.rework_pct),
                    engineers,
                    days,
                    HOURS_PER_WORKDAY,
                    cost,
                    currency
                ),
                severity: REWORK_COST_THRESHOLDS.classify(figures.weekly_rework_cost),
            },
            PainSignal {
                id: "ps5".to_string(),
                label_en: "Monthly Compliance Hours".to_string(),
                label_ar: "ساعات الامتثال الشهرية".to_string(),
                value: figures.monthly_compliance_hours,
                unit: "hrs/month".to_string(),
                formula: "Reported directly by Finance".to_string(),
                severity: COMPLIANCE_HOURS_THRESHOLDS.classify(figures.monthly_compliance_hours),
            },
        ]
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
