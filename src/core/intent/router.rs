//! Navigation targets and routing suggestions

use super::keywords::Intent;
use serde::{Deserialize, Serialize};

/// Keys of the portal's navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationKey {
    /// IT support portal
    ItSupport,
    /// AI learning hub
    AiLearning,
    /// Innovation lab
    Innovation,
    /// HR resources
    HrSupport,
    /// AI assessments
    Assessments,
    /// Portal dashboard
    Dashboard,
}

/// A navigation target presented to the client
#[derive(Debug, Clone, Serialize)]
pub struct NavigationOption {
    /// Stable key
    pub key: NavigationKey,
    /// Display title
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Portal path
    pub path: &'static str,
}

/// All navigation targets
pub static NAVIGATION_OPTIONS: &[NavigationOption] = &[
    NavigationOption {
        key: NavigationKey::ItSupport,
        title: "IT Support Portal",
        description: "Submit tickets, track issues, get technical help",
        path: "/support",
    },
    NavigationOption {
        key: NavigationKey::AiLearning,
        title: "AI Learning Hub",
        description: "Explore AI courses, tutorials, and resources",
        path: "/ai-learning",
    },
    NavigationOption {
        key: NavigationKey::Innovation,
        title: "Innovation Lab",
        description: "Submit ideas, collaborate on projects",
        path: "/submit-bold-idea",
    },
    NavigationOption {
        key: NavigationKey::HrSupport,
        title: "HR Resources",
        description: "Policies, benefits, team information",
        path: "/hr",
    },
    NavigationOption {
        key: NavigationKey::Assessments,
        title: "AI Assessments",
        description: "Evaluate AI readiness and capabilities",
        path: "/ai-assessments",
    },
    NavigationOption {
        key: NavigationKey::Dashboard,
        title: "Dashboard",
        description: "Overview of activities and metrics",
        path: "/",
    },
];

/// Look up the full navigation option for a key
pub fn navigation_option(key: NavigationKey) -> &'static NavigationOption {
    let index = match key {
        NavigationKey::ItSupport => 0,
        NavigationKey::AiLearning => 1,
        NavigationKey::Innovation => 2,
        NavigationKey::HrSupport => 3,
        NavigationKey::Assessments => 4,
        NavigationKey::Dashboard => 5,
    };
    &NAVIGATION_OPTIONS[index]
}

/// The navigation target an intent routes to directly, if any
///
/// Categories without a page of their own route to nothing here and rely
/// on the dashboard fallback.
pub fn primary_target(intent: Intent) -> Option<NavigationKey> {
    match intent {
        Intent::ItSupport => Some(NavigationKey::ItSupport),
        Intent::AiLearning => Some(NavigationKey::AiLearning),
        Intent::Innovation => Some(NavigationKey::Innovation),
        Intent::HrSupport => Some(NavigationKey::HrSupport),
        Intent::Assessments => Some(NavigationKey::Assessments),
        Intent::ResourcesSpecific
        | Intent::TimeTracking
        | Intent::Navigation
        | Intent::General => None,
    }
}

/// A contextually related target shown alongside the primary one
fn related_target(intent: Intent) -> Option<NavigationKey> {
    match intent {
        Intent::ItSupport => Some(NavigationKey::AiLearning),
        Intent::AiLearning => Some(NavigationKey::Assessments),
        Intent::Innovation => Some(NavigationKey::AiLearning),
        _ => None,
    }
}

/// Build routing suggestions for a classified message
///
/// The primary target is included only above the confidence floor, the
/// dashboard is always present, and the result is capped at three
/// distinct keys.
pub fn generate_routing_suggestions(intent: Intent, confidence: f64) -> Vec<NavigationKey> {
    let mut suggestions = Vec::new();

    if confidence > 0.2 {
        if let Some(key) = primary_target(intent) {
            suggestions.push(key);
        }
    }

    if !suggestions.contains(&NavigationKey::Dashboard) {
        suggestions.push(NavigationKey::Dashboard);
    }

    if let Some(related) = related_target(intent) {
        if !suggestions.contains(&related) {
            suggestions.push(related);
        }
    }

    suggestions.truncate(3);
    suggestions
}

/// Resolve suggestion keys into full navigation options
pub fn resolve_suggestions(keys: &[NavigationKey]) -> Vec<&'static NavigationOption> {
    keys.iter().map(|&key| navigation_option(key)).collect()
}
