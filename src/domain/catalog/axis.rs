//! Maturity axes - the eight fixed categories every question belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight maturity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    Process,
    DailyOps,
    DataFlow,
    Finance,
    Governance,
    Decision,
    Automation,
    AIReadiness,
}

impl Axis {
    /// All axes in reporting order.
    pub const ALL: [Axis; 8] = [
        Axis::Process,
        Axis::DailyOps,
        Axis::DataFlow,
        Axis::Finance,
        Axis::Governance,
        Axis::Decision,
        Axis::Automation,
        Axis::AIReadiness,
    ];

    /// Position of this axis in [`Axis::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// English display label.
    pub fn label_en(&self) -> &'static str {
        match self {
            Axis::Process => "Process & SOPs",
            Axis::DailyOps => "Daily Operations",
            Axis::DataFlow => "Data Flow",
            Axis::Finance => "Finance",
            Axis::Governance => "Governance & Compliance",
            Axis::Decision => "Decision & Risk",
            Axis::Automation => "Automation",
            Axis::AIReadiness => "AI Readiness",
        }
    }

    /// Arabic display label.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Axis::Process => "العمليات والإجراءات",
            Axis::DailyOps => "العمليات اليومية",
            Axis::DataFlow => "تدفق البيانات",
            Axis::Finance => "المالية",
            Axis::Governance => "الحوكمة والامتثال",
            Axis::Decision => "القرارات والمخاطر",
            Axis::Automation => "الأتمتة",
            Axis::AIReadiness => "الاستعداد للذكاء الاصطناعي",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), position);
        }
    }

    #[test]
    fn axis_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Axis::AIReadiness).unwrap(), "\"AIReadiness\"");
        let parsed: Axis = serde_json::from_str("\"DailyOps\"").unwrap();
        assert_eq!(parsed, Axis::DailyOps);
    }

    #[test]
    fn every_axis_has_both_labels() {
        for axis in Axis::ALL {
            assert!(!axis.label_en().is_empty());
            assert!(!axis.label_ar().is_empty());
        }
    }
}
