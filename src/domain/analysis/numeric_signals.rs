//! Numeric Signal Extractor - Locates answers measuring operational metrics.

use crate::domain::assessment::Assessment;
use crate::domain::catalog::{NumericSignalKey, QuestionCatalog};

/// Lookup of numeric answers by metric key.
pub struct NumericSignalExtractor;

impl NumericSignalExtractor {
    /// Returns the first numeric answer whose question measures `key`.
    ///
    /// Respondents are scanned in list order, then each respondent's answers
    /// in list order. The first match wins; several respondents answering the
    /// same metric are not reconciled.
    ///
    /// # Edge Cases
    /// - Skipped answers: Ignored, whatever value they hold
    /// - Non-numeric value on a numeric question: Ignored
    /// - Question missing from the catalog: Ignored
    pub fn extract(
        assessment: &Assessment,
        catalog: &QuestionCatalog,
        key: NumericSignalKey,
    ) -> Option<f64> {
        assessment
            .respondents
            .iter()
            .flat_map(|r| r.answers.iter())
            .filter(|answer| {
                catalog
                    .get(&answer.question_id)
                    .is_some_and(|q| q.measures(key))
            })
            .find_map(|answer| answer.effective_value().and_then(|v| v.as_number()))
    }
}
