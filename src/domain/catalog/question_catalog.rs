//! QuestionCatalog - ordered, indexed collection of question definitions.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;

use super::{CatalogError, NumericSignalKey, Question, Role};

const BUILTIN_CATALOG_YAML: &str = include_str!("../../../catalog/questions.yaml");

static BUILTIN: OnceCell<QuestionCatalog> = OnceCell::new();

/// Immutable question catalog.
///
/// Questions keep their configured order; lookups by id go through an index
/// built at construction time.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl QuestionCatalog {
    /// Builds a catalog, checking structural consistency only.
    ///
    /// # Errors
    ///
    /// - `Empty` when no questions are given
    /// - `DuplicateId` when two questions share an id
    /// - `InvalidWeight` for a weight that is not a positive finite number
    /// - `MissingOptions` for a choice question without options
    /// - `NoRoles` for a question nobody is asked
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if !(question.weight.is_finite() && question.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    id: question.id.clone(),
                    weight: question.weight,
                });
            }
            if question.kind.is_choice() && question.options.is_empty() {
                return Err(CatalogError::MissingOptions(question.id.clone()));
            }
            if question.roles.is_empty() {
                return Err(CatalogError::NoRoles(question.id.clone()));
            }
            if index.insert(question.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
        }

        Ok(Self { questions, index })
    }

    /// Parses a catalog from a YAML sequence of questions.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(questions)
    }

    /// Reads and parses a YAML catalog file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    /// The catalog shipped with the crate, parsed once on first use.
    pub fn builtin() -> Result<&'static QuestionCatalog, CatalogError> {
        BUILTIN.get_or_try_init(|| Self::from_yaml_str(BUILTIN_CATALOG_YAML))
    }

    /// Looks up a question by id.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    /// Iterates questions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Questions asked of the given role, in catalog order.
    pub fn for_role(&self, role: Role) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.applies_to(role))
    }

    /// Numeric questions measuring the given metric, in catalog order.
    pub fn with_numeric_key(&self, key: NumericSignalKey) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.measures(key))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Axis, QuestionKind};

    const SMALL_CATALOG: &str = r#"
- id: q1
  roles: [Manager]
  axis: Governance
  kind: single
  weight: 2
  text_en: "Q1"
  text_ar: "س1"
  options:
    - { value: a, score: 1, label_en: "Low", label_ar: "منخفض" }
    - { value: b, score: 5, label_en: "High", label_ar: "مرتفع" }
- id: q2
  roles: [Engineer, Operations]
  axis: DailyOps
  kind: numeric
  weight: 1.5
  text_en: "Q2"
  text_ar: "س2"
  numeric_key: reportingHoursPerDay
  unit: hours
"#;

    #[test]
    fn parses_and_indexes_questions() {
        let catalog = QuestionCatalog::from_yaml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("q1").map(|q| q.axis), Some(Axis::Governance));
        assert_eq!(catalog.get("q2").map(|q| q.kind), Some(QuestionKind::Numeric));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn preserves_catalog_order() {
        let catalog = QuestionCatalog::from_yaml_str(SMALL_CATALOG).unwrap();
        let ids: Vec<_> = catalog.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
    }

    #[test]
    fn filters_by_role_and_numeric_key() {
        let catalog = QuestionCatalog::from_yaml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.for_role(Role::Manager).count(), 1);
        assert_eq!(catalog.for_role(Role::Finance).count(), 0);

        let reporting: Vec<_> = catalog
            .with_numeric_key(NumericSignalKey::ReportingHoursPerDay)
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(reporting, vec!["q2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions: Vec<Question> = serde_yaml::from_str(SMALL_CATALOG).unwrap();
        questions[1].id = "q1".to_string();
        assert!(matches!(
            QuestionCatalog::new(questions),
            Err(CatalogError::DuplicateId(id)) if id == "q1"
        ));
    }

    #[test]
    fn rejects_non_positive_weight() {
        let mut questions: Vec<Question> = serde_yaml::from_str(SMALL_CATALOG).unwrap();
        questions[0].weight = 0.0;
        assert!(matches!(
            QuestionCatalog::new(questions),
            Err(CatalogError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn rejects_choice_question_without_options() {
        let mut questions: Vec<Question> = serde_yaml::from_str(SMALL_CATALOG).unwrap();
        questions[0].options.clear();
        assert!(matches!(
            QuestionCatalog::new(questions),
            Err(CatalogError::MissingOptions(_))
        ));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(QuestionCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_out_of_range_option_score() {
        let yaml = SMALL_CATALOG.replace("score: 5", "score: 7");
        assert!(matches!(
            QuestionCatalog::from_yaml_str(&yaml),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn builtin_catalog_covers_every_axis() {
        let catalog = QuestionCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 53);
        for axis in Axis::ALL {
            assert!(
                catalog.iter().any(|q| q.axis == axis && q.kind == QuestionKind::Single),
                "no scored question for {axis:?}"
            );
        }
    }

    #[test]
    fn builtin_catalog_has_one_question_per_pain_signal_key() {
        let catalog = QuestionCatalog::builtin().unwrap();
        for key in [
            NumericSignalKey::ReportingHoursPerDay,
            NumericSignalKey::DuplicateEntriesPerDay,
            NumericSignalKey::ReworkPct,
            NumericSignalKey::HoursToPrepareClaim,
            NumericSignalKey::HoursComplianceMonthly,
        ] {
            assert_eq!(catalog.with_numeric_key(key).count(), 1, "{key}");
        }
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = QuestionCatalog::from_yaml_file("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
