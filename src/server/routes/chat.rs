//! Chat assistant endpoints
//!
//! The envelope on `/api/chat` is fixed by the frontend contract: intent
//! analysis and routing suggestions are always present, and a completion
//! failure flips `success` rather than the HTTP status.

use crate::core::assistant::ChatTurn;
use crate::core::intent::{resolve_suggestions, IntentAnalysis, NavigationOption};
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::utils::error::PortalError;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};

/// Configure chat routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/chat")
            .route("", web::post().to(chat))
            .route("/health", web::get().to(chat_health)),
    );
}

/// Chat request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    /// User message
    message: String,
    /// Prior turns, oldest first
    #[serde(default)]
    conversation_history: Vec<ChatTurn>,
}

/// Chat response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatResponse {
    response: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    intent_analysis: IntentAnalysis,
    routing_suggestions: Vec<&'static NavigationOption>,
}

/// Chat endpoint
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    if request.message.trim().is_empty() {
        return Err(PortalError::bad_request("Message is required").into());
    }

    let reply = state
        .assistant
        .chat(&request.message, &request.conversation_history)
        .await;

    Ok(HttpResponse::Ok().json(ChatResponse {
        response: reply.response,
        success: reply.success,
        error: reply.error,
        intent_analysis: reply.analysis,
        routing_suggestions: resolve_suggestions(&reply.suggestions),
    }))
}

/// Completion backend health endpoint
pub async fn chat_health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let health = state.assistant.health().await;
    Ok(ApiResponse::success(health).to_http_response())
}
