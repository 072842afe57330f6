//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::server::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let assistant = state.assistant.health().await;

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "assistant": assistant
    }))
}
