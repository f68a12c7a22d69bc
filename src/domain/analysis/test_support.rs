//! Shared fixtures for analysis unit tests.

use crate::domain::assessment::{Answer, Assessment, CompanySize, Respondent};
use crate::domain::catalog::{QuestionCatalog, Role};

const TEST_CATALOG: &str = r#"
- id: gov_a
  roles: [Manager, Finance]
  axis: Governance
  kind: single
  weight: 1
  text_en: "Governance A"
  text_ar: "حوكمة أ"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: gov_b
  roles: [Manager, Finance]
  axis: Governance
  kind: single
  weight: 2
  text_en: "Governance B"
  text_ar: "حوكمة ب"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: data_a
  roles: [Manager, Engineer]
  axis: DataFlow
  kind: single
  weight: 1
  text_en: "Data A"
  text_ar: "بيانات أ"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: dec_a
  roles: [Manager]
  axis: Decision
  kind: single
  weight: 1
  text_en: "Decision A"
  text_ar: "قرار أ"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: fin_a
  roles: [Finance]
  axis: Finance
  kind: single
  weight: 1
  text_en: "Finance A"
  text_ar: "مالية أ"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: ai_a
  roles: [Manager]
  axis: AIReadiness
  kind: single
  weight: 1
  text_en: "AI A"
  text_ar: "ذكاء أ"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: tools
  roles: [Engineer]
  axis: Automation
  kind: multi
  text_en: "Tools"
  text_ar: "أدوات"
  options:
    - { value: a, score: 1, label_en: "None", label_ar: "لا شيء" }
    - { value: b, score: 2, label_en: "Ad hoc", label_ar: "عشوائي" }
    - { value: c, score: 3, label_en: "Defined", label_ar: "محدد" }
    - { value: d, score: 5, label_en: "Systematic", label_ar: "منهجي" }
- id: notes
  roles: [Manager, Engineer]
  axis: AIReadiness
  kind: text
  text_en: "Notes"
  text_ar: "ملاحظات"
- id: reporting
  roles: [Engineer, Operations]
  axis: DailyOps
  kind: numeric
  weight: 2
  text_en: "Reporting hours per day"
  text_ar: "ساعات التقارير يومياً"
  numeric_key: reportingHoursPerDay
- id: duplicates
  roles: [Engineer, Operations]
  axis: DailyOps
  kind: numeric
  text_en: "Duplicate entries per day"
  text_ar: "الإدخالات المكررة يومياً"
  numeric_key: duplicateEntriesPerDay
- id: rework
  roles: [Engineer, Operations]
  axis: Decision
  kind: numeric
  text_en: "Rework percentage"
  text_ar: "نسبة إعادة العمل"
  numeric_key: reworkPct
- id: claim
  roles: [Finance]
  axis: Finance
  kind: numeric
  text_en: "Hours to prepare a claim"
  text_ar: "ساعات إعداد المستخلص"
  numeric_key: hoursToPrepareClaim
- id: compliance
  roles: [Finance]
  axis: Finance
  kind: numeric
  text_en: "Compliance hours per month"
  text_ar: "ساعات الامتثال شهرياً"
  numeric_key: hoursComplianceMonthly
"#;

/// Small catalog with two weighted governance questions and one numeric
/// question per pain-signal key.
pub(crate) fn catalog() -> QuestionCatalog {
    QuestionCatalog::from_yaml_str(TEST_CATALOG).expect("test catalog parses")
}

/// Draft assessment with default ROI settings and the given respondents.
pub(crate) fn assessment_with(respondents: Vec<(Role, Vec<Answer>)>) -> Assessment {
    let mut assessment =
        Assessment::new("Test Client", "Test Assessor", CompanySize::Small).expect("valid names");
    for (role, answers) in respondents {
        let mut respondent = Respondent::new(role, role.label());
        for answer in answers {
            respondent.record(answer);
        }
        assessment.respondents.push(respondent);
    }
    assessment
}
