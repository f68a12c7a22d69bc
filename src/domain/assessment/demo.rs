//! Worked example assessment used for walkthroughs and tests.

use super::{Answer, Assessment, AssessmentStatus, CompanySize, Currency, Respondent, RoiSettings};
use crate::domain::catalog::{QuestionCatalog, QuestionKind, Role};
use crate::domain::foundation::{AssessmentId, Timestamp};

enum DemoValue {
    Token(&'static str),
    Number(f64),
}

use DemoValue::{Number, Token};

const DEMO_ANSWERS: &[(&str, DemoValue)] = &[
    ("p01", Token("b")),
    ("p02", Token("b")),
    ("p03", Token("b")),
    ("p04", Token("a")),
    ("p05", Number(8.0)),
    ("p06", Number(60.0)),
    ("p07", Token("a")),
    ("do01", Token("a")),
    ("do02", Number(2.5)),
    ("do03", Number(4.0)),
    ("do04", Token("c")),
    ("do05", Number(7.0)),
    ("do06", Token("b")),
    ("do07", Token("b")),
    ("do08", Number(6.0)),
    ("df01", Token("b")),
    ("df02", Token("a")),
    ("df03", Token("b")),
    ("df04", Token("b")),
    ("df05", Token("a")),
    ("df06", Token("a")),
    ("fi01", Number(12.0)),
    ("fi02", Token("b")),
    ("fi03", Token("b")),
    ("fi04", Number(24.0)),
    ("fi05", Token("b")),
    ("fi06", Token("a")),
    ("fi07", Token("a")),
    ("gc01", Token("a")),
    ("gc02", Token("a")),
    ("gc03", Token("a")),
    ("gc04", Token("b")),
    ("gc05", Number(8.0)),
    ("gc06", Token("a")),
    ("gc07", Token("a")),
    ("dr01", Token("b")),
    ("dr02", Number(3.0)),
    ("dr03", Token("a")),
    ("dr04", Token("a")),
    ("dr05", Number(12.0)),
    ("dr06", Token("a")),
    ("au01", Token("a")),
    ("au02", Token("a")),
    ("au03", Token("a")),
    ("au04", Token("a")),
    ("au05", Token("a")),
    ("ai01", Token("b")),
    ("ai02", Token("b")),
    ("ai03", Token("c")),
    ("ai04", Token("b")),
    ("ai05", Token("b")),
    ("ai06", Token("تقليل التقارير وتتبع المواد")),
    ("ai07", Token("b")),
];

const DEMO_RESPONDENTS: [(Role, &str); 4] = [
    (Role::Manager, "محمد العبدالله"),
    (Role::Engineer, "أحمد الحربي"),
    (Role::Finance, "سارة الموسى"),
    (Role::Operations, "خالد الرشيد"),
];

fn demo_value(question_id: &str) -> Option<&'static DemoValue> {
    DEMO_ANSWERS
        .iter()
        .find(|(id, _)| *id == question_id)
        .map(|(_, value)| value)
}

/// Builds a completed assessment where every role answers every question
/// the catalog asks of it; questions without a demo value are skipped.
pub fn demo_assessment(catalog: &QuestionCatalog) -> Assessment {
    let now = Timestamp::now();

    let respondents = DEMO_RESPONDENTS
        .iter()
        .map(|&(role, name)| {
            let mut respondent = Respondent::new(role, name);
            for question in catalog.for_role(role) {
                let answer = match (demo_value(&question.id), question.kind) {
                    (Some(Number(n)), _) => Answer::number(&question.id, *n),
                    (Some(Token(text)), QuestionKind::Text) => Answer::text(&question.id, *text),
                    (Some(Token(token)), QuestionKind::Multi) => {
                        Answer::multi(&question.id, [*token])
                    }
                    (Some(Token(token)), _) => Answer::choice(&question.id, *token),
                    (None, _) => Answer::skipped(&question.id),
                };
                respondent.record(answer);
            }
            respondent.completed_at = Some(now);
            respondent
        })
        .collect();

    Assessment {
        id: AssessmentId::new(),
        client_name: "شركة البناء العربية المتحدة".to_string(),
        project_name: Some("تقييم التحول الرقمي 2025".to_string()),
        assessor_name: "أحمد المحمد".to_string(),
        company_size: CompanySize::Medium,
        created_at: now,
        updated_at: now,
        respondents,
        roi_settings: RoiSettings {
            engineers_count: 8,
            working_days_per_week: 5,
            saving_rate: 0.35,
            hourly_cost: 85.0,
            overhead_multiplier: 1.3,
            currency: Currency::Sar,
        },
        status: AssessmentStatus::Completed,
    }
}
