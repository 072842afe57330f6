//! User management endpoints
//!
//! Admin-facing directory operations plus the self-service profile pair.

use crate::server::middleware::{get_request_user, request_origin};
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::services::{UserListFilter, UserUpdate};
use crate::utils::error::PortalError;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use uuid::Uuid;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .route("", web::get().to(list_users))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(deactivate_user)),
    )
    .service(
        web::scope("/api/user")
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::patch().to(update_profile)),
    );
}

/// List users endpoint
pub async fn list_users(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<UserListFilter>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    if !state.policy.can_manage_users(Some(&user)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let page = state.services.users.list(query.into_inner()).await;
    Ok(ApiResponse::success(page).to_http_response())
}

/// Update user endpoint
pub async fn update_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UserUpdate>,
) -> ActixResult<HttpResponse> {
    let actor = get_request_user(&req)?;
    if !state.policy.can_manage_users(Some(&actor)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let id = path.into_inner();
    let changes = body.into_inner();
    let mut updated = state.services.users.update(id, changes.clone()).await?;
    state.services.hydrate(&mut updated).await;

    state.services.audit.log_action(
        actor.id(),
        "USER_UPDATED",
        Some(id.to_string()),
        serde_json::json!({ "changes": changes }),
        request_origin(&req),
    );

    Ok(ApiResponse::success(updated).to_http_response())
}

/// Deactivate user endpoint
///
/// Soft delete: the record stays in the directory with INACTIVE status.
pub async fn deactivate_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let actor = get_request_user(&req)?;
    if !state.policy.can_manage_users(Some(&actor)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let id = path.into_inner();
    if id == actor.id() {
        return Err(PortalError::bad_request("Cannot deactivate your own account").into());
    }

    let user = state.services.users.deactivate(id).await?;

    state.services.audit.log_action(
        actor.id(),
        "USER_DEACTIVATED",
        Some(id.to_string()),
        serde_json::json!({ "email": user.email }),
        request_origin(&req),
    );

    Ok(ApiResponse::success(user).to_http_response())
}

/// Profile update request
#[derive(Debug, Deserialize)]
struct ProfileUpdate {
    /// New display name
    name: Option<String>,
    /// New avatar image URL
    image: Option<String>,
}

/// Current user profile endpoint
pub async fn get_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    Ok(ApiResponse::success(user).to_http_response())
}

/// Profile update endpoint
pub async fn update_profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<ProfileUpdate>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let body = body.into_inner();

    let changes = UserUpdate {
        name: body.name,
        image: body.image,
        role: None,
        status: None,
    };
    let mut updated = state.services.users.update(user.id(), changes).await?;
    state.services.hydrate(&mut updated).await;

    Ok(ApiResponse::success(updated).to_http_response())
}
