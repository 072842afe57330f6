//! Intent categories and their keyword table
//!
//! Table order is load-bearing: the classifier keeps the first category
//! with the strictly greatest confidence, so earlier entries win ties.

use serde::{Deserialize, Serialize};

/// Intent category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Questions about specific documents and forms
    ResourcesSpecific,
    /// Time tracking and timesheets
    TimeTracking,
    /// Technical problems and support requests
    ItSupport,
    /// Learning, courses, and AI education
    AiLearning,
    /// Ideas and innovation projects
    Innovation,
    /// HR policies and people questions
    HrSupport,
    /// Readiness and capability assessments
    Assessments,
    /// Finding the way around the portal
    Navigation,
    /// No category matched
    General,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::ResourcesSpecific => "RESOURCES_SPECIFIC",
            Intent::TimeTracking => "TIME_TRACKING",
            Intent::ItSupport => "IT_SUPPORT",
            Intent::AiLearning => "AI_LEARNING",
            Intent::Innovation => "INNOVATION",
            Intent::HrSupport => "HR_SUPPORT",
            Intent::Assessments => "ASSESSMENTS",
            Intent::Navigation => "NAVIGATION",
            Intent::General => "GENERAL",
        };
        write!(f, "{}", name)
    }
}

/// Keyword lists per category, in match-priority order
pub static KEYWORD_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::ResourcesSpecific,
        &[
            "pip form",
            "pip",
            "performance improvement plan",
            "corrective action",
            "caf form",
            "coaching log",
            "incident report",
            "performance evaluation",
            "supervisor tool",
            "leave policy",
            "leave application",
            "payroll",
            "sprout",
            "aleluya",
            "rippling",
            "quickbooks",
            "timesheets",
            "acceptable use policy",
            "aup",
            "code of conduct",
            "referral program",
            "where is",
            "find",
            "locate",
            "document",
            "form",
            "manual",
        ],
    ),
    (
        Intent::TimeTracking,
        &[
            "time tracking",
            "track time",
            "tsheets",
            "sprout",
            "aleluya",
            "clock in",
            "clock out",
            "timesheet",
            "hours",
            "time entry",
            "payroll time",
        ],
    ),
    (
        Intent::ItSupport,
        &[
            "help",
            "support",
            "issue",
            "problem",
            "bug",
            "error",
            "broken",
            "fix",
            "ticket",
            "computer",
            "software",
            "hardware",
            "network",
            "login",
            "password",
            "access",
            "technical",
            "tech",
            "system",
            "server",
            "email",
            "printer",
            "wifi",
            "device",
            "not working",
            "cant access",
            "trouble with",
            "having issues",
        ],
    ),
    (
        Intent::AiLearning,
        &[
            "learn",
            "training",
            "course",
            "tutorial",
            "ai",
            "artificial intelligence",
            "machine learning",
            "ml",
            "education",
            "skill",
            "knowledge",
            "study",
            "certification",
            "workshop",
            "guide",
            "how to",
            "teach",
            "understand",
        ],
    ),
    (
        Intent::Innovation,
        &[
            "idea",
            "innovation",
            "project",
            "proposal",
            "suggestion",
            "improvement",
            "creative",
            "brainstorm",
            "solution",
            "new",
            "invent",
            "develop",
            "collaborate",
            "team",
            "initiative",
            "opportunity",
            "bold idea",
        ],
    ),
    (
        Intent::HrSupport,
        &[
            "hr",
            "human resources",
            "policy",
            "benefit",
            "vacation",
            "leave",
            "employee",
            "team",
            "manager",
            "performance",
            "review",
            "salary",
            "hiring",
            "onboarding",
            "handbook",
            "culture",
            "time off",
            "pto",
        ],
    ),
    (
        Intent::Assessments,
        &[
            "assessment",
            "evaluate",
            "test",
            "measure",
            "analyze",
            "readiness",
            "capability",
            "skill level",
            "benchmark",
            "survey",
            "questionnaire",
        ],
    ),
    // "find" and "locate" stay with ResourcesSpecific only: listing them
    // here too would let wayfinding outscore the document category on
    // document-location questions under the recall formula.
    (
        Intent::Navigation,
        &[
            "where",
            "how to get",
            "navigate",
            "go to",
            "access",
            "menu",
            "section",
            "page",
            "dashboard",
            "sidebar",
        ],
    ),
];
