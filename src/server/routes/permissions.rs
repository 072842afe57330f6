//! Permission management endpoints
//!
//! Reads are allowed for the user themselves; replacing a grant list is a
//! user-management operation and is audited.

use crate::core::models::PermissionGrant;
use crate::server::middleware::{get_request_user, request_origin};
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::utils::error::PortalError;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Configure permission routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/permissions")
            .route("/user/{id}", web::get().to(get_user_permissions))
            .route("/user/{id}", web::put().to(set_user_permissions)),
    );
}

/// Permission state of one user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PermissionsResponse {
    user_id: Uuid,
    role: String,
    god_mode: bool,
    permissions: Vec<PermissionGrant>,
}

/// Grant replacement request
#[derive(Debug, Deserialize)]
struct SetPermissionsRequest {
    permissions: Vec<PermissionGrant>,
}

/// Get user permissions endpoint
pub async fn get_user_permissions(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let actor = get_request_user(&req)?;
    let id = path.into_inner();

    if id != actor.id() && !state.policy.can_manage_users(Some(&actor)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let Some(target) = state.services.users.get(id).await else {
        return Err(PortalError::not_found("User not found").into());
    };

    let response = PermissionsResponse {
        user_id: target.id(),
        role: target.role.to_string(),
        god_mode: state.policy.has_god_mode(Some(&target)),
        permissions: target.permissions,
    };
    Ok(ApiResponse::success(response).to_http_response())
}

/// Replace user permissions endpoint
pub async fn set_user_permissions(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SetPermissionsRequest>,
) -> ActixResult<HttpResponse> {
    let actor = get_request_user(&req)?;
    if !state.policy.can_manage_users(Some(&actor)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let id = path.into_inner();
    let grants = body.into_inner().permissions;
    let updated = state.services.users.set_permissions(id, grants.clone()).await?;

    state.services.audit.log_action(
        actor.id(),
        "PERMISSIONS_UPDATED",
        Some(id.to_string()),
        serde_json::json!({ "permissions": grants }),
        request_origin(&req),
    );

    let response = PermissionsResponse {
        user_id: updated.id(),
        role: updated.role.to_string(),
        god_mode: state.policy.has_god_mode(Some(&updated)),
        permissions: updated.permissions,
    };
    Ok(ApiResponse::success(response).to_http_response())
}
