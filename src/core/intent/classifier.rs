//! Keyword-recall intent classifier

use super::keywords::{Intent, KEYWORD_TABLE};
use serde::{Deserialize, Serialize};

/// Result of classifying one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentAnalysis {
    /// Winning category
    pub intent: Intent,
    /// Fraction of the category's keywords found in the message
    pub confidence: f64,
    /// Keywords that matched, in table order
    pub keywords: Vec<String>,
}

impl IntentAnalysis {
    /// Analysis for a message that matched nothing
    pub fn general() -> Self {
        Self {
            intent: Intent::General,
            confidence: 0.0,
            keywords: vec![],
        }
    }
}

/// Classify a message against the static keyword table
///
/// Confidence per category is matched keywords over total keywords, with
/// case-insensitive substring matching. The first category with the
/// strictly greatest confidence wins; a message matching nothing is
/// `GENERAL` at confidence zero.
pub fn detect_intent(message: &str) -> IntentAnalysis {
    let normalized = message.to_lowercase();
    let mut best = IntentAnalysis::general();

    for (intent, keywords) in KEYWORD_TABLE {
        let matched: Vec<String> = keywords
            .iter()
            .filter(|keyword| normalized.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect();

        if matched.is_empty() {
            continue;
        }

        let confidence = matched.len() as f64 / keywords.len() as f64;
        if confidence > best.confidence {
            best = IntentAnalysis {
                intent: *intent,
                confidence,
                keywords: matched,
            };
        }
    }

    best
}
