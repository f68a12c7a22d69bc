//! Risk Deriver - Rule-based risk register.

use serde::{Deserialize, Serialize};

use super::display_number;
use super::rules::RuleContext;

/// Rework percentage above which rework is flagged as a risk.
pub const HIGH_REWORK_PCT: f64 = 10.0;

/// Categorical probability / impact rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Med,
    High,
}

/// One entry of the risk register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    pub probability: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation_en: String,
    pub mitigation_ar: String,
}

struct RiskTemplate {
    id: &'static str,
    title_en: &'static str,
    title_ar: &'static str,
    probability: RiskLevel,
    impact: RiskLevel,
    mitigation_en: &'static str,
    mitigation_ar: &'static str,
}

impl RiskTemplate {
    fn instantiate(&self, title_suffix: Option<String>) -> RiskItem {
        let (title_en, title_ar) = match title_suffix {
            Some(suffix) => (
                format!("{} {}", self.title_en, suffix),
                format!("{} {}", self.title_ar, suffix),
            ),
            None => (self.title_en.to_string(), self.title_ar.to_string()),
        };

        RiskItem {
            id: self.id.to_string(),
            title_en,
            title_ar,
            probability: self.probability,
            impact: self.impact,
            mitigation_en: self.mitigation_en.to_string(),
            mitigation_ar: self.mitigation_ar.to_string(),
        }
    }
}

struct RiskRule {
    applies: fn(&RuleContext) -> bool,
    title_suffix: Option<fn(&RuleContext) -> String>,
    template: RiskTemplate,
}

const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        applies: RuleContext::governance_weak,
        title_suffix: None,
        template: RiskTemplate {
            id: "r1",
            title_en: "ZATCA / Zakat Non-Compliance",
            title_ar: "عدم الامتثال لمتطلبات هيئة الزكاة والضرائب",
            probability: RiskLevel::High,
            impact: RiskLevel::High,
            mitigation_en: "Implement document hub + compliance checklist + digital archive",
            mitigation_ar: "تطبيق مستودع وثائق رقمي + قوائم تحقق للامتثال",
        },
    },
    RiskRule {
        applies: RuleContext::data_flow_weak,
        title_suffix: None,
        template: RiskTemplate {
            id: "r2",
            title_en: "Data Loss & Fragmentation",
            title_ar: "ضياع البيانات وتشتتها",
            probability: RiskLevel::High,
            impact: RiskLevel::High,
            mitigation_en: "Centralize data to single source of truth with backup",
            mitigation_ar: "مركزة البيانات في مصدر واحد مع نسخ احتياطية يومية",
        },
    },
    RiskRule {
        applies: RuleContext::decision_weak,
        title_suffix: None,
        template: RiskTemplate {
            id: "r3",
            title_en: "Slow Decision-Making",
            title_ar: "بطء اتخاذ القرارات التشغيلية",
            probability: RiskLevel::Med,
            impact: RiskLevel::High,
            mitigation_en: "Deploy weekly KPI board + escalation rules",
            mitigation_ar: "لوحة مؤشرات أسبوعية + قواعد تصعيد المشكلات",
        },
    },
    RiskRule {
        applies: rework_high,
        title_suffix: Some(rework_percentage),
        template: RiskTemplate {
            id: "r4",
            title_en: "High Rework Rate",
            title_ar: "نسبة إعادة عمل مرتفعة",
            probability: RiskLevel::Med,
            impact: RiskLevel::Med,
            mitigation_en: "Implement QC checklists + digital daily inspection forms",
            mitigation_ar: "قوائم تحقق جودة + نماذج فحص يومي رقمية",
        },
    },
    RiskRule {
        applies: RuleContext::finance_weak,
        title_suffix: None,
        template: RiskTemplate {
            id: "r5",
            title_en: "Cash Flow Blind Spots",
            title_ar: "نقاط عمياء في التدفق النقدي",
            probability: RiskLevel::Med,
            impact: RiskLevel::High,
            mitigation_en: "Build cost vs. progress dashboard + claims tracker",
            mitigation_ar: "لوحة تكلفة مقابل تقدم + متابعة المستخلصات",
        },
    },
];

const BASELINE_RISK: RiskTemplate = RiskTemplate {
    id: "r6",
    title_en: "Key-Person Dependency",
    title_ar: "الاعتماد على أشخاص بعينهم",
    probability: RiskLevel::Low,
    impact: RiskLevel::Med,
    mitigation_en: "Document SOPs + cross-train team members",
    mitigation_ar: "توثيق الإجراءات + تدريب متقاطع للفريق",
};

fn rework_high(context: &RuleContext) -> bool {
    context.inputs.rework_pct > HIGH_REWORK_PCT
}

fn rework_percentage(context: &RuleContext) -> String {
    format!("({}%)", display_number(context.inputs.rework_pct))
}

/// Risk register derivation.
pub struct RiskDeriver;

impl RiskDeriver {
    /// Evaluates every rule in order and appends the ones that hold,
    /// followed by the always-present key-person dependency risk.
    pub fn derive(context: &RuleContext) -> Vec<RiskItem> {
        RISK_RULES
            .iter()
            .filter(|rule| (rule.applies)(context))
            .map(|rule| {
                rule.template
                    .instantiate(rule.title_suffix.map(|suffix| suffix(context)))
            })
            .chain(std::iter::once(BASELINE_RISK.instantiate(None)))
            .collect()
    }
}
