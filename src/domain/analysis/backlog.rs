//! Improvement backlog template.
//!
//! The backlog does not depend on scores. Every analysis carries the same
//! eight initiatives; prerequisites always reference earlier items, so the
//! declared order is already a valid execution order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Role;

/// Effort classification of an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InitiativeSize {
    S,
    M,
    L,
}

/// One prioritized initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogItem {
    pub id: String,
    pub epic_en: String,
    pub epic_ar: String,
    pub initiative_en: String,
    pub initiative_ar: String,
    pub task_en: String,
    pub task_ar: String,
    pub owner: Role,
    pub size: InitiativeSize,
    /// Ids of items that must be finished first.
    pub prerequisites: Vec<String>,
    pub kpi_en: String,
    pub kpi_ar: String,
    pub timeline_weeks: u32,
}

struct BacklogTemplate {
    id: &'static str,
    epic: (&'static str, &'static str),
    initiative: (&'static str, &'static str),
    task: (&'static str, &'static str),
    owner: Role,
    size: InitiativeSize,
    prerequisites: &'static [&'static str],
    kpi: (&'static str, &'static str),
    timeline_weeks: u32,
}

impl BacklogTemplate {
    fn to_item(&self) -> BacklogItem {
        BacklogItem {
            id: self.id.to_string(),
            epic_en: self.epic.0.to_string(),
            epic_ar: self.epic.1.to_string(),
            initiative_en: self.initiative.0.to_string(),
            initiative_ar: self.initiative.1.to_string(),
            task_en: self.task.0.to_string(),
            task_ar: self.task.1.to_string(),
            owner: self.owner,
            size: self.size,
            prerequisites: self.prerequisites.iter().map(|p| p.to_string()).collect(),
            kpi_en: self.kpi.0.to_string(),
            kpi_ar: self.kpi.1.to_string(),
            timeline_weeks: self.timeline_weeks,
        }
    }
}

const STANDARD_BACKLOG: &[BacklogTemplate] = &[
    BacklogTemplate {
        id: "bl1",
        epic: ("Data Foundation", "أساس البيانات"),
        initiative: ("Central Document Hub", "مستودع وثائق مركزي"),
        task: ("Setup Drive structure + naming convention", "هيكل Drive + اتفاقية تسمية"),
        owner: Role::Operations,
        size: InitiativeSize::S,
        prerequisites: &[],
        kpi: ("All projects accessible in < 30 sec", "الوصول لأي مشروع < 30 ثانية"),
        timeline_weeks: 1,
    },
    BacklogTemplate {
        id: "bl2",
        epic: ("Daily Operations", "العمليات اليومية"),
        initiative: ("Daily Report Template", "نموذج التقرير اليومي"),
        task: (
            "Design + deploy Google Form daily report",
            "تصميم + نشر نموذج Google للتقرير اليومي",
        ),
        owner: Role::Engineer,
        size: InitiativeSize::S,
        prerequisites: &["bl1"],
        kpi: ("Reporting time < 20 min/day", "وقت التقرير < 20 دقيقة يومياً"),
        timeline_weeks: 2,
    },
    BacklogTemplate {
        id: "bl3",
        epic: ("Finance Visibility", "الرؤية المالية"),
        initiative: ("Cost vs Progress Dashboard", "لوحة التكلفة مقابل التقدم"),
        task: (
            "Build Power BI / Google Sheets dashboard",
            "بناء داشبورد Power BI / Google Sheets",
        ),
        owner: Role::Finance,
        size: InitiativeSize::M,
        prerequisites: &["bl1"],
        kpi: ("Cash position report in < 10 min", "تقرير الوضع النقدي < 10 دقائق"),
        timeline_weeks: 4,
    },
    BacklogTemplate {
        id: "bl4",
        epic: ("Governance", "الحوكمة"),
        initiative: ("ZATCA Readiness", "الاستعداد لمتطلبات الزكاة"),
        task: (
            "Document archive + compliance checklist",
            "أرشيف وثائق + قائمة تحقق امتثال",
        ),
        owner: Role::Finance,
        size: InitiativeSize::M,
        prerequisites: &["bl1"],
        kpi: ("Audit-ready in < 1 hour", "جاهز للتدقيق في < ساعة"),
        timeline_weeks: 3,
    },
    BacklogTemplate {
        id: "bl5",
        epic: ("Process Automation", "أتمتة العمليات"),
        initiative: ("Variation Order Tracker", "متتبع طلبات التغيير"),
        task: ("Digital VO form + approval workflow", "نموذج VO رقمي + سير موافقات"),
        owner: Role::Manager,
        size: InitiativeSize::M,
        prerequisites: &["bl2"],
        kpi: ("VO cycle time < 5 days", "دورة VO < 5 أيام"),
        timeline_weeks: 5,
    },
    BacklogTemplate {
        id: "bl6",
        epic: ("AI Integration", "تكامل الذكاء الاصطناعي"),
        initiative: ("AI Report Summarizer", "ملخص تقارير بالذكاء الاصطناعي"),
        task: (
            "Pilot GPT-4 summary on daily field reports",
            "تجربة تلخيص التقارير الميدانية بـ GPT-4",
        ),
        owner: Role::Operations,
        size: InitiativeSize::S,
        prerequisites: &["bl2"],
        kpi: ("70% reduction in report prep time", "تقليل 70% في وقت التقرير"),
        timeline_weeks: 6,
    },
    BacklogTemplate {
        id: "bl7",
        epic: ("Decision Intelligence", "ذكاء القرار"),
        initiative: ("KPI Weekly Board", "لوحة مؤشرات أسبوعية"),
        task: (
            "Deploy 5-metric weekly dashboard + alert rules",
            "داشبورد 5 مؤشرات أسبوعية + قواعد تنبيه",
        ),
        owner: Role::Manager,
        size: InitiativeSize::M,
        prerequisites: &["bl3"],
        kpi: ("Decision latency < 24 hours", "تأخر القرار < 24 ساعة"),
        timeline_weeks: 8,
    },
    BacklogTemplate {
        id: "bl8",
        epic: ("Field Digitization", "رقمنة الميدان"),
        initiative: ("Mobile Field App", "تطبيق ميداني"),
        task: (
            "Deploy offline-capable field reporting app",
            "نشر تطبيق ميداني يعمل بدون إنترنت",
        ),
        owner: Role::Engineer,
        size: InitiativeSize::L,
        prerequisites: &["bl1", "bl2"],
        kpi: ("100% field reports digital", "100% تقارير ميدانية رقمية"),
        timeline_weeks: 12,
    },
];

/// Returns the fixed backlog in priority order.
pub fn standard_backlog() -> Vec<BacklogItem> {
    STANDARD_BACKLOG.iter().map(BacklogTemplate::to_item).collect()
}

/// Returns prerequisite ids that do not name an earlier item.
///
/// Empty for any well-formed backlog, including [`standard_backlog`].
pub fn unresolved_prerequisites(items: &[BacklogItem]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unresolved = Vec::new();

    for item in items {
        for prerequisite in &item.prerequisites {
            if !seen.contains(prerequisite.as_str()) {
                unresolved.push(prerequisite.clone());
            }
        }
        seen.insert(item.id.as_str());
    }

    unresolved
}

/// Items whose prerequisites are all in `completed`, excluding completed ones.
pub fn ready_items<'a>(items: &'a [BacklogItem], completed: &[&str]) -> Vec<&'a BacklogItem> {
    items
        .iter()
        .filter(|item| !completed.contains(&item.id.as_str()))
        .filter(|item| {
            item.prerequisites
                .iter()
                .all(|p| completed.contains(&p.as_str()))
        })
        .collect()
}
