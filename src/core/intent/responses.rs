//! Scripted assistant replies for degraded operation.
//!
//! When the completion backend is unconfigured or unreachable the chat
//! endpoint still answers. High-confidence intents map to fixed reply
//! texts so the most common questions get a useful pointer instead of a
//! generic greeting.

use super::classifier::IntentAnalysis;
use super::keywords::Intent;

/// Default reply when no backend is configured and no intent matched
/// strongly enough for a scripted answer.
pub const DEFAULT_GREETING: &str =
    "Hi! I'm ARIA, your AI assistant. I can help you navigate to the right tools!";

/// Default reply when the backend call failed mid-request.
pub const CONNECTION_FALLBACK: &str = "I'm ARIA, your AI assistant! I'm having connection issues but can still help you navigate to the right tools.";

/// Reply substituted when a completion arrives without any content.
pub const EMPTY_COMPLETION_FALLBACK: &str =
    "Hi! I'm ARIA, your AI assistant. How can I help you today?";

/// Minimum confidence before a scripted reply is used.
const CANNED_THRESHOLD: f64 = 0.3;

/// Picks a scripted reply for the detected intent.
///
/// Returns `None` when confidence is at or below the threshold or the
/// intent has no script; callers fall back to whichever default fits
/// their failure mode.
pub fn canned_response(message: &str, analysis: &IntentAnalysis) -> Option<&'static str> {
    if analysis.confidence <= CANNED_THRESHOLD {
        return None;
    }

    let lower = message.to_lowercase();
    let reply = match analysis.intent {
        Intent::ResourcesSpecific => {
            if lower.contains("pip") {
                "The **PIP form** is in Resources → **Supervisor Tool Kit** section. You can also use the search bar on the Resources page to find it quickly!"
            } else if lower.contains("leave") || lower.contains("vacation") {
                "**Leave policies** are in Resources → **Important Reading Manuals** section. Available for PH and COL countries."
            } else if lower.contains("payroll")
                || lower.contains("sprout")
                || lower.contains("aleluya")
                || lower.contains("rippling")
            {
                "**Payroll info** is in Resources → **Important Tools** section. Sprout (PH), Aleluya (COL), or Rippling (US) depending on your country."
            } else {
                "Check the **Resources** page! Use the search bar or browse by sections: Important Tools, Reading Manuals, or Supervisor Tool Kit."
            }
        }
        Intent::TimeTracking => {
            "For time tracking, click **Track My Time** in the sidebar! Choose from TSheets, Sprout, or Aleluya based on your location."
        }
        Intent::ItSupport => {
            "I can see you're having technical issues! 💻\n\nPlease **Submit a Ticket** - you can find the button on the homepage or in the lower left menu. Our IT team will help you out!"
        }
        Intent::AiLearning => {
            "Interested in AI? Great! 🧠\n\nCheck out the **Prompt Tutor** or **Trainings** section for courses and tutorials."
        }
        Intent::Innovation => {
            "Love the innovative thinking! 💡\n\nClick **Submit Bold Idea** in the Employee Tools section or use the quick action on the homepage!"
        }
        Intent::HrSupport => {
            "I can help with HR questions! 👥\n\nVisit the **Resources** page for policies, forms, and procedures. Use the search bar to find specific documents."
        }
        _ => return None,
    };

    Some(reply)
}
