//! Recommendation Generators - Quick wins and AI opportunities.
//!
//! Both generators walk a fixed list of (condition, recommendation) pairs
//! in order, then append their unconditional baseline entries.

use serde::{Deserialize, Serialize};

use super::rules::RuleContext;

/// Reporting hours per day above which a report template is recommended.
pub const REPORTING_QUICK_WIN_HOURS: f64 = 1.5;

/// Duplicate entries per day above which a central log is recommended.
pub const DUPLICATE_QUICK_WIN_ENTRIES: f64 = 2.0;

/// Reporting hours per day above which AI summarization is suggested.
pub const REPORTING_AI_HOURS: f64 = 1.0;

/// Rework percentage above which computer vision inspection is suggested.
pub const REWORK_AI_PCT: f64 = 8.0;

/// AI readiness score from which anomaly detection is suggested.
pub const ANOMALY_DETECTION_AI_READINESS: f64 = 2.0;

/// A bilingual recommended action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text_en: String,
    pub text_ar: String,
}

struct Text {
    en: &'static str,
    ar: &'static str,
}

impl Text {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            text_en: self.en.to_string(),
            text_ar: self.ar.to_string(),
        }
    }
}

struct RecommendationRule {
    applies: fn(&RuleContext) -> bool,
    text: Text,
}

const QUICK_WIN_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: heavy_reporting,
        text: Text {
            en: "Standardize daily report template (WhatsApp → Google Form)",
            ar: "توحيد نموذج التقرير اليومي (واتساب → Google Form)",
        },
    },
    RecommendationRule {
        applies: frequent_duplicates,
        text: Text {
            en: "Create central project log — eliminate parallel entry",
            ar: "إنشاء سجل مشروع مركزي لإزالة إدخال البيانات المتكرر",
        },
    },
    RecommendationRule {
        applies: RuleContext::governance_weak,
        text: Text {
            en: "Build compliance checklist for ZATCA readiness",
            ar: "بناء قائمة تحقق للاستعداد لمتطلبات الزكاة والضرائب",
        },
    },
    RecommendationRule {
        applies: RuleContext::data_flow_weak,
        text: Text {
            en: "Set up shared Drive with folder structure for all projects",
            ar: "إنشاء مجلد مشترك منظم في Drive لكل المشاريع",
        },
    },
    RecommendationRule {
        applies: RuleContext::finance_weak,
        text: Text {
            en: "Build weekly cash position sheet — 30 min per week",
            ar: "جدول وضع نقدي أسبوعي — 30 دقيقة أسبوعياً",
        },
    },
];

const QUICK_WIN_BASELINE: &[Text] = &[Text {
    en: "Hold weekly 30-min team sync with standard agenda",
    ar: "اجتماع فريق أسبوعي 30 دقيقة بأجندة موحدة",
}];

const AI_OPPORTUNITY_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: any_manual_reporting,
        text: Text {
            en: "AI report summarization — reduce reporting from hours to minutes",
            ar: "تلخيص التقارير بالذكاء الاصطناعي — تقليل وقت التقارير من ساعات لدقائق",
        },
    },
    RecommendationRule {
        applies: anomaly_detection_fits,
        text: Text {
            en: "Anomaly detection — auto-flag cost/schedule deviations",
            ar: "كشف الشذوذ — تنبيه تلقائي عند انحراف التكلفة أو الجدول",
        },
    },
    RecommendationRule {
        applies: rework_above_ai_threshold,
        text: Text {
            en: "Computer vision for site inspection — reduce rework",
            ar: "رؤية حاسوبية لفحص المواقع — تقليل إعادة العمل",
        },
    },
];

const AI_OPPORTUNITY_BASELINE: &[Text] = &[
    Text {
        en: "AI-powered cost estimation from historical project data",
        ar: "تقدير التكاليف بالذكاء الاصطناعي من بيانات المشاريع السابقة",
    },
    Text {
        en: "Predictive delay alerts based on field data patterns",
        ar: "تنبيهات تأخير تنبؤية بناءً على أنماط البيانات الميدانية",
    },
];

fn heavy_reporting(context: &RuleContext) -> bool {
    context.inputs.reporting_hours_per_day > REPORTING_QUICK_WIN_HOURS
}

fn frequent_duplicates(context: &RuleContext) -> bool {
    context.inputs.duplicate_entries_per_day > DUPLICATE_QUICK_WIN_ENTRIES
}

fn any_manual_reporting(context: &RuleContext) -> bool {
    context.inputs.reporting_hours_per_day > REPORTING_AI_HOURS
}

fn anomaly_detection_fits(context: &RuleContext) -> bool {
    context.data_flow_weak() || context.ai_readiness >= ANOMALY_DETECTION_AI_READINESS
}

fn rework_above_ai_threshold(context: &RuleContext) -> bool {
    context.inputs.rework_pct > REWORK_AI_PCT
}

fn evaluate(rules: &[RecommendationRule], baseline: &[Text], context: &RuleContext) -> Vec<Recommendation> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(context))
        .map(|rule| &rule.text)
        .chain(baseline.iter())
        .map(Text::to_recommendation)
        .collect()
}

/// Quick-win generator.
pub struct QuickWinGenerator;

impl QuickWinGenerator {
    pub fn generate(context: &RuleContext) -> Vec<Recommendation> {
        evaluate(QUICK_WIN_RULES, QUICK_WIN_BASELINE, context)
    }
}

/// AI-opportunity generator.
pub struct AiOpportunityGenerator;

impl AiOpportunityGenerator {
    pub fn generate(context: &RuleContext) -> Vec<Recommendation> {
        evaluate(AI_OPPORTUNITY_RULES, AI_OPPORTUNITY_BASELINE, context)
    }
}
