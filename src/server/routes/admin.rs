//! Admin analytics endpoints

use crate::core::models::AuditEntry;
use crate::server::middleware::get_request_user;
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::services::{GroupAnalytics, UserAnalytics};
use crate::utils::error::PortalError;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/admin").route("/analytics", web::get().to(analytics)));
}

/// Aggregate statistics for the admin dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminAnalytics {
    users: UserAnalytics,
    groups: GroupAnalytics,
    recent_activity: Vec<AuditEntry>,
}

/// Admin analytics endpoint
pub async fn analytics(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    if !state.policy.can_access_admin_panel(Some(&user)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let response = AdminAnalytics {
        users: state.services.users.analytics().await,
        groups: state.services.groups.analytics().await,
        recent_activity: state.services.audit.recent(10),
    };
    Ok(ApiResponse::success(response).to_http_response())
}
