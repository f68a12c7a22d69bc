//! Option score value object (1 to 5 maturity scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maturity score attached to a choice option: 1 (ad hoc) to 5 (systematic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionScore(u8);

impl OptionScore {
    /// Lowest score on the scale.
    pub const MIN: Self = Self(1);

    /// Highest score on the scale.
    pub const MAX: Self = Self(5);

    /// Creates an OptionScore, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                f64::from(Self::MIN.0),
                f64::from(Self::MAX.0),
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for weighted arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for OptionScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<OptionScore> for u8 {
    fn from(score: OptionScore) -> Self {
        score.0
    }
}

impl fmt::Display for OptionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
