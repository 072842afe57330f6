//! Resource library endpoints

use crate::server::middleware::get_request_user;
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};

/// Configure resource routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/resources").route("", web::get().to(list_resources)));
}

/// List accessible resources endpoint
///
/// Answers with the documents this user is cleared for, grouped by
/// category in catalog order.
pub async fn list_resources(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let categories = state.services.resources.accessible_documents(&user).await;
    Ok(ApiResponse::success(categories).to_http_response())
}
