//! Assistant orchestration
//!
//! Classification and routing always run locally; the completion backend
//! only supplies the reply text. A backend failure degrades to the canned
//! reply path and never surfaces as an error to the caller.

use std::sync::Arc;
use tracing::{info, warn};

use super::client::CompletionBackend;
use super::prompt::{ChatTurn, build_messages};
use crate::core::intent::{
    CONNECTION_FALLBACK, DEFAULT_GREETING, EMPTY_COMPLETION_FALLBACK, IntentAnalysis,
    NavigationKey, canned_response, detect_intent, generate_routing_suggestions,
};
use crate::core::models::{BackendHealth, HealthStatus};

/// Assistant output for one chat message
#[derive(Debug, Clone)]
pub struct AssistantReply {
    /// Assistant text
    pub response: String,
    /// False when the completion backend failed
    pub success: bool,
    /// Error detail for a failed completion
    pub error: Option<String>,
    /// Classifier output
    pub analysis: IntentAnalysis,
    /// Navigation suggestions
    pub suggestions: Vec<NavigationKey>,
}

/// Chat orchestration over the classifier and the completion backend
pub struct AssistantService {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl AssistantService {
    /// Create the service; without a backend it runs in degraded mode
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        if backend.is_none() {
            info!("💬 No completion backend configured, assistant will use canned replies");
        }
        Self { backend }
    }

    /// Answer one chat message
    pub async fn chat(&self, message: &str, history: &[ChatTurn]) -> AssistantReply {
        let analysis = detect_intent(message);
        let suggestions = generate_routing_suggestions(analysis.intent, analysis.confidence);

        info!(
            "🧠 Intent detected: {} ({}%)",
            analysis.intent,
            (analysis.confidence * 100.0).round() as u32
        );

        let Some(backend) = &self.backend else {
            let response = canned_response(message, &analysis)
                .unwrap_or(DEFAULT_GREETING)
                .to_string();
            return AssistantReply {
                response,
                success: true,
                error: None,
                analysis,
                suggestions,
            };
        };

        let messages = build_messages(&analysis, &suggestions, history, message);
        match backend.complete(messages).await {
            Ok(content) => AssistantReply {
                response: content.unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string()),
                success: true,
                error: None,
                analysis,
                suggestions,
            },
            Err(e) => {
                warn!("Completion backend failed: {}", e);
                let response = canned_response(message, &analysis)
                    .unwrap_or(CONNECTION_FALLBACK)
                    .to_string();
                AssistantReply {
                    response,
                    success: false,
                    error: Some(e.to_string()),
                    analysis,
                    suggestions,
                }
            }
        }
    }

    /// Health of the completion backend
    pub async fn health(&self) -> BackendHealth {
        match &self.backend {
            Some(backend) => backend.health_check().await,
            None => BackendHealth {
                status: HealthStatus::Degraded,
                configured: false,
                last_check: chrono::Utc::now(),
                error_message: None,
            },
        }
    }
}
