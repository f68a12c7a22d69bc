//! ROI assumptions attached to an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Currency used for cost figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Sar,
    Aed,
    Usd,
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Sar => "SAR",
            Currency::Aed => "AED",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Assumptions used to turn time losses into money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiSettings {
    pub engineers_count: u32,
    pub working_days_per_week: u32,
    /// Fraction of the loss expected to be recovered (0.0 - 1.0).
    pub saving_rate: f64,
    pub hourly_cost: f64,
    pub overhead_multiplier: f64,
    pub currency: Currency,
}

impl Default for RoiSettings {
    fn default() -> Self {
        Self {
            engineers_count: 5,
            working_days_per_week: 5,
            saving_rate: 0.35,
            hourly_cost: 75.0,
            overhead_multiplier: 1.3,
            currency: Currency::Sar,
        }
    }
}

impl RoiSettings {
    /// Checks that every assumption is in a usable range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.engineers_count == 0 {
            return Err(ValidationError::out_of_range(
                "engineers_count",
                1.0,
                f64::from(u32::MAX),
                0.0,
            ));
        }
        if !(1..=7).contains(&self.working_days_per_week) {
            return Err(ValidationError::out_of_range(
                "working_days_per_week",
                1.0,
                7.0,
                f64::from(self.working_days_per_week),
            ));
        }
        if !(0.0..=1.0).contains(&self.saving_rate) {
            return Err(ValidationError::out_of_range(
                "saving_rate",
                0.0,
                1.0,
                self.saving_rate,
            ));
        }
        if !(self.hourly_cost.is_finite() && self.hourly_cost >= 0.0) {
            return Err(ValidationError::invalid_format(
                "hourly_cost",
                "must be a non-negative number",
            ));
        }
        if !(self.overhead_multiplier.is_finite() && self.overhead_multiplier > 0.0) {
            return Err(ValidationError::invalid_format(
                "overhead_multiplier",
                "must be a positive number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_assumptions() {
        let roi = RoiSettings::default();
        assert_eq!(roi.engineers_count, 5);
        assert_eq!(roi.working_days_per_week, 5);
        assert_eq!(roi.saving_rate, 0.35);
        assert_eq!(roi.hourly_cost, 75.0);
        assert_eq!(roi.overhead_multiplier, 1.3);
        assert_eq!(roi.currency, Currency::Sar);
        assert!(roi.validate().is_ok());
    }

    #[test]
    fn rejects_zero_engineers() {
        let roi = RoiSettings {
            engineers_count: 0,
            ..RoiSettings::default()
        };
        assert!(roi.validate().is_err());
    }

    #[test]
    fn rejects_eight_day_week() {
        let roi = RoiSettings {
            working_days_per_week: 8,
            ..RoiSettings::default()
        };
        assert!(roi.validate().is_err());
    }

    #[test]
    fn rejects_saving_rate_above_one() {
        let roi = RoiSettings {
            saving_rate: 1.2,
            ..RoiSettings::default()
        };
        assert!(matches!(
            roi.validate(),
            Err(ValidationError::OutOfRange { field, .. }) if field == "saving_rate"
        ));
    }

    #[test]
    fn rejects_non_positive_overhead() {
        let roi = RoiSettings {
            overhead_multiplier: 0.0,
            ..RoiSettings::default()
        };
        assert!(roi.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let roi: RoiSettings =
            serde_json::from_str(r#"{"engineers_count": 8, "currency": "USD"}"#).unwrap();
        assert_eq!(roi.engineers_count, 8);
        assert_eq!(roi.hourly_cost, 75.0);
        assert_eq!(roi.currency, Currency::Usd);
    }
}
