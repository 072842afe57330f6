//! Group management endpoints
//!
//! CRUD over groups and their member lists. Every mutation runs through
//! the access policy first and lands in the audit log.

use crate::core::models::GroupMembership;
use crate::server::middleware::{get_request_user, request_origin};
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::services::{AddMember, CreateGroup, GroupListFilter, GroupUpdate};
use crate::utils::error::PortalError;
use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use uuid::Uuid;

/// Configure group routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/groups")
            .route("", web::get().to(list_groups))
            .route("", web::post().to(create_group))
            .route("/{id}", web::get().to(get_group))
            .route("/{id}", web::put().to(update_group))
            .route("/{id}", web::delete().to(delete_group))
            .route("/{id}/members", web::get().to(list_members))
            .route("/{id}/members", web::post().to(add_member))
            .route("/{id}/members/{user_id}", web::delete().to(remove_member)),
    );
}

/// A group member with directory fields attached
#[derive(Debug, Serialize)]
struct GroupMember {
    /// The membership record
    #[serde(flatten)]
    membership: GroupMembership,
    /// Display name from the directory
    name: Option<String>,
    /// Email from the directory
    email: Option<String>,
}

/// List groups endpoint
///
/// Filters apply first, then the visibility rules: private groups only
/// show up for their members and for users who can view all groups.
pub async fn list_groups(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<GroupListFilter>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;

    let groups = state.services.groups.list(query.into_inner()).await;
    let visible: Vec<_> = groups
        .into_iter()
        .filter(|view| state.policy.can_view_group(Some(&user), &view.group))
        .collect();

    Ok(ApiResponse::success(visible).to_http_response())
}

/// Create group endpoint
pub async fn create_group(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateGroup>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    if !state.policy.can_create_groups(Some(&user)) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let view = state.services.groups.create(user.id(), body.into_inner()).await?;

    state.services.audit.log_action(
        user.id(),
        "GROUP_CREATED",
        Some(view.group.id().to_string()),
        serde_json::json!({ "name": view.group.name, "type": view.group.kind.to_string() }),
        request_origin(&req),
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(view)))
}

/// Get group endpoint
pub async fn get_group(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let group_id = path.into_inner();

    let Some(view) = state.services.groups.get(group_id).await else {
        return Err(PortalError::not_found("Group not found").into());
    };
    if !state.policy.can_view_group(Some(&user), &view.group) {
        return Err(PortalError::forbidden("You do not have access to this group").into());
    }

    Ok(ApiResponse::success(view).to_http_response())
}

/// Update group endpoint
pub async fn update_group(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<GroupUpdate>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let group_id = path.into_inner();

    if !state.policy.can_manage_group(Some(&user), group_id) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let changes = body.into_inner();
    let view = state.services.groups.update(group_id, changes.clone()).await?;

    state.services.audit.log_action(
        user.id(),
        "GROUP_UPDATED",
        Some(group_id.to_string()),
        serde_json::json!({ "changes": changes }),
        request_origin(&req),
    );

    Ok(ApiResponse::success(view).to_http_response())
}

/// Delete group endpoint
pub async fn delete_group(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let group_id = path.into_inner();

    if !state.policy.can_manage_group(Some(&user), group_id) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let group = state.services.groups.delete(group_id).await?;

    state.services.audit.log_action(
        user.id(),
        "GROUP_DELETED",
        Some(group_id.to_string()),
        serde_json::json!({ "name": group.name }),
        request_origin(&req),
    );

    Ok(ApiResponse::success(group).to_http_response())
}

/// List group members endpoint
pub async fn list_members(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let group_id = path.into_inner();

    let Some(view) = state.services.groups.get(group_id).await else {
        return Err(PortalError::not_found("Group not found").into());
    };
    if !state.policy.can_view_group(Some(&user), &view.group) {
        return Err(PortalError::forbidden("You do not have access to this group").into());
    }

    let memberships = state.services.groups.members(group_id).await?;
    let mut members = Vec::with_capacity(memberships.len());
    for membership in memberships {
        let record = state.services.users.get(membership.user_id).await;
        members.push(GroupMember {
            name: record.as_ref().and_then(|u| u.name.clone()),
            email: record.map(|u| u.email),
            membership,
        });
    }

    Ok(ApiResponse::success(members).to_http_response())
}

/// Add group member endpoint
pub async fn add_member(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<AddMember>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let group_id = path.into_inner();

    if !state.policy.can_invite_to_group(Some(&user), group_id) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    let data = body.into_inner();
    if state.services.users.get(data.user_id).await.is_none() {
        return Err(PortalError::not_found("User not found").into());
    }

    let membership = state.services.groups.add_member(group_id, data).await?;

    state.services.audit.log_action(
        user.id(),
        "MEMBER_ADDED",
        Some(group_id.to_string()),
        serde_json::json!({ "userId": membership.user_id }),
        request_origin(&req),
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(membership)))
}

/// Remove group member endpoint
///
/// Members may remove themselves; removing anyone else requires group
/// management rights.
pub async fn remove_member(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> ActixResult<HttpResponse> {
    let user = get_request_user(&req)?;
    let (group_id, member_id) = path.into_inner();

    if member_id != user.id() && !state.policy.can_manage_group(Some(&user), group_id) {
        return Err(PortalError::forbidden("Insufficient permissions").into());
    }

    state.services.groups.remove_member(group_id, member_id).await?;

    state.services.audit.log_action(
        user.id(),
        "MEMBER_REMOVED",
        Some(group_id.to_string()),
        serde_json::json!({ "userId": member_id }),
        request_origin(&req),
    );

    Ok(ApiResponse::success(serde_json::json!({ "removed": member_id })).to_http_response())
}
