//! System prompt and completion message assembly

use serde::{Deserialize, Serialize};

use super::client::CompletionMessage;
use crate::core::intent::{IntentAnalysis, NavigationKey, resolve_suggestions};

/// Fixed instruction block for the assistant persona
pub const SYSTEM_PROMPT: &str = "You are ARIA, an AI assistant for the Bold Business AI Workbench platform. You help users with:
- Analyzing group performance and productivity metrics
- Providing actionable insights for team improvement
- Suggesting workflow optimizations
- Answering questions about platform features
- Generating reports and recommendations

Always be helpful, professional, and focused on business productivity. Keep responses SHORT and CONCISE (2-3 lines maximum). For IT issues, direct to Submit Ticket immediately.";

/// One prior message in the chat thread
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    /// Message text
    pub text: String,
    /// Whether the assistant sent it
    pub is_bot: bool,
}

/// Build the system prompt with classifier context appended
pub fn build_system_prompt(analysis: &IntentAnalysis, suggestions: &[NavigationKey]) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);

    prompt.push_str("\n\nContext from message analysis:");
    prompt.push_str(&format!(
        "\n- Detected intent: {} (confidence {}%)",
        analysis.intent,
        (analysis.confidence * 100.0).round() as u32
    ));

    if !analysis.keywords.is_empty() {
        prompt.push_str(&format!(
            "\n- Matched keywords: {}",
            analysis.keywords.join(", ")
        ));
    }

    if !suggestions.is_empty() {
        let titles: Vec<&str> = resolve_suggestions(suggestions)
            .iter()
            .map(|option| option.title)
            .collect();
        prompt.push_str(&format!("\n- Suggested navigation: {}", titles.join(", ")));
    }

    prompt
}

/// Assemble the full message list for one completion call
///
/// History turns are forwarded verbatim in order, bot turns as assistant
/// messages, ahead of the current user message.
pub fn build_messages(
    analysis: &IntentAnalysis,
    suggestions: &[NavigationKey],
    history: &[ChatTurn],
    message: &str,
) -> Vec<CompletionMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(CompletionMessage::system(build_system_prompt(
        analysis,
        suggestions,
    )));

    for turn in history {
        if turn.is_bot {
            messages.push(CompletionMessage::assistant(turn.text.clone()));
        } else {
            messages.push(CompletionMessage::user(turn.text.clone()));
        }
    }

    messages.push(CompletionMessage::user(message));
    messages
}
