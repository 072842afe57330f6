//! In-memory user directory
//!
//! Holds every user record the portal knows about, keyed by id with a
//! lowercase email index. Sign-in goes through `upsert_from_auth`, which
//! enforces the allowed email domain and seeds role-default grants.

use crate::config::AuthConfig;
use crate::core::authz::default_permissions_for;
use crate::core::models::{PermissionGrant, User, UserRole, UserStatus};
use crate::utils::error::{PortalError, Result};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Profile fields received from Google sign-in
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Email address
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Avatar image URL
    pub image: Option<String>,
}

/// Filter and paging options for the user list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListFilter {
    /// Substring match over name and email, case-insensitive
    pub search: Option<String>,
    /// Restrict to one role
    pub role: Option<UserRole>,
    /// Restrict to one status
    pub status: Option<UserStatus>,
    /// Page number, starting at 1
    pub page: Option<usize>,
    /// Page size
    pub limit: Option<usize>,
}

/// One page of the user list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// Users on this page
    pub users: Vec<User>,
    /// Total matching users
    pub total: usize,
    /// Page number
    pub page: usize,
    /// Page size
    pub limit: usize,
    /// Total number of pages
    pub total_pages: usize,
}

/// Admin-editable user fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name
    pub name: Option<String>,
    /// New avatar image URL
    pub image: Option<String>,
    /// New role; changing it reseeds the role-default grants
    pub role: Option<UserRole>,
    /// New status
    pub status: Option<UserStatus>,
}

/// Aggregate user statistics for the admin surface
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    /// Total number of users
    pub total_users: usize,
    /// Users with ACTIVE status
    pub active_users: usize,
    /// Users created since midnight UTC
    pub new_users_today: usize,
    /// Sum of login counts across all users
    pub total_logins: u64,
    /// User counts per role
    pub users_by_role: HashMap<String, usize>,
    /// User counts per status
    pub users_by_status: HashMap<String, usize>,
}

/// In-memory user store
pub struct UserDirectory {
    users: DashMap<Uuid, User>,
    /// Lowercase email -> user id
    emails: DashMap<String, Uuid>,
    allowed_domain: String,
    owner_email: Option<String>,
    default_role: UserRole,
}

impl UserDirectory {
    /// Create an empty directory from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            allowed_domain: config.allowed_email_domain.to_lowercase(),
            owner_email: config.owner_email.as_ref().map(|e| e.to_lowercase()),
            default_role: config.rbac.default_role,
        }
    }

    /// Create or update a user from a Google sign-in
    ///
    /// New users get the configured default role, or OWNER when the email
    /// matches the configured owner email. Every call records a login.
    pub async fn upsert_from_auth(&self, profile: GoogleProfile) -> Result<User> {
        let email = profile.email.trim().to_lowercase();

        if email.is_empty() || !email.contains('@') {
            return Err(PortalError::bad_request("A valid email address is required"));
        }

        if !self.allowed_domain.is_empty()
            && !email.ends_with(&format!("@{}", self.allowed_domain))
        {
            return Err(PortalError::forbidden(format!(
                "Access is restricted to @{} accounts",
                self.allowed_domain
            )));
        }

        if let Some(id) = self.emails.get(&email).map(|entry| *entry.value()) {
            let mut user = self
                .users
                .get_mut(&id)
                .ok_or_else(|| PortalError::internal("Email index points to a missing user"))?;
            if profile.name.is_some() {
                user.name = profile.name;
            }
            if profile.image.is_some() {
                user.image = profile.image;
            }
            user.record_login();
            return Ok(user.clone());
        }

        let is_owner = self
            .owner_email
            .as_deref()
            .is_some_and(|owner| owner == email);
        let role = if is_owner {
            UserRole::Owner
        } else {
            self.default_role
        };

        let mut user = User::new(email.clone(), role);
        user.name = profile.name;
        user.image = profile.image;
        user.permissions = default_permissions_for(role);
        user.record_login();

        info!("👤 New user created: {} ({})", email, role);

        self.emails.insert(email, user.id());
        self.users.insert(user.id(), user.clone());
        Ok(user)
    }

    /// Look up a user by id
    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|entry| entry.clone())
    }

    /// Look up a user by email, case-insensitive
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let id = *self.emails.get(&email.trim().to_lowercase())?.value();
        self.get(id).await
    }

    /// List users with filtering and pagination
    pub async fn list(&self, filter: UserListFilter) -> UserPage {
        let page = filter.page.unwrap_or(1).max(1);
        let limit = filter.limit.unwrap_or(20).max(1);
        let search = filter.search.as_deref().map(str::to_lowercase);

        let mut matches: Vec<User> = self
            .users
            .iter()
            .filter(|entry| {
                let user = entry.value();
                if let Some(search) = &search {
                    let name_hit = user
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(search));
                    if !name_hit && !user.email.contains(search) {
                        return false;
                    }
                }
                if filter.role.is_some_and(|role| user.role != role) {
                    return false;
                }
                if filter.status.is_some_and(|status| user.status != status) {
                    return false;
                }
                true
            })
            .map(|entry| entry.clone())
            .collect();

        // Owners first, then newest accounts
        matches.sort_by(|a, b| {
            role_rank(a.role)
                .cmp(&role_rank(b.role))
                .then(b.metadata.created_at.cmp(&a.metadata.created_at))
        });

        let total = matches.len();
        let total_pages = total.div_ceil(limit);
        let users = matches
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        UserPage {
            users,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Apply admin edits to a user
    pub async fn update(&self, id: Uuid, changes: UserUpdate) -> Result<User> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| PortalError::not_found("User not found"))?;

        if let Some(name) = changes.name {
            user.name = Some(name);
        }
        if let Some(image) = changes.image {
            user.image = Some(image);
        }
        if let Some(role) = changes.role {
            if user.role != role {
                user.role = role;
                user.permissions = default_permissions_for(role);
            }
        }
        if let Some(status) = changes.status {
            user.status = status;
        }
        user.metadata.touch();

        Ok(user.clone())
    }

    /// Soft-delete a user by marking them INACTIVE
    pub async fn deactivate(&self, id: Uuid) -> Result<User> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| PortalError::not_found("User not found"))?;

        user.status = UserStatus::Inactive;
        user.metadata.touch();
        Ok(user.clone())
    }

    /// Replace a user's explicit grants
    pub async fn set_permissions(&self, id: Uuid, grants: Vec<PermissionGrant>) -> Result<User> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| PortalError::not_found("User not found"))?;

        user.permissions = grants;
        user.metadata.touch();
        Ok(user.clone())
    }

    /// Read a user's explicit grants
    pub async fn permissions_of(&self, id: Uuid) -> Result<Vec<PermissionGrant>> {
        self.users
            .get(&id)
            .map(|user| user.permissions.clone())
            .ok_or_else(|| PortalError::not_found("User not found"))
    }

    /// Aggregate statistics over the whole directory
    pub async fn analytics(&self) -> UserAnalytics {
        let mut users_by_role: HashMap<String, usize> = [
            UserRole::Owner,
            UserRole::Admin,
            UserRole::TeamManager,
            UserRole::Member,
        ]
        .into_iter()
        .map(|role| (role.to_string(), 0))
        .collect();
        let mut users_by_status: HashMap<String, usize> = [
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Suspended,
        ]
        .into_iter()
        .map(|status| (status.to_string(), 0))
        .collect();

        let today = chrono::Utc::now().date_naive();
        let mut total_users = 0;
        let mut active_users = 0;
        let mut new_users_today = 0;
        let mut total_logins = 0u64;

        for entry in self.users.iter() {
            let user = entry.value();
            total_users += 1;
            if user.is_active() {
                active_users += 1;
            }
            if user.metadata.created_at.date_naive() == today {
                new_users_today += 1;
            }
            total_logins += user.login_count;
            *users_by_role.entry(user.role.to_string()).or_insert(0) += 1;
            *users_by_status.entry(user.status.to_string()).or_insert(0) += 1;
        }

        UserAnalytics {
            total_users,
            active_users,
            new_users_today,
            total_logins,
            users_by_role,
            users_by_status,
        }
    }
}

fn role_rank(role: UserRole) -> u8 {
    match role {
        UserRole::Owner => 0,
        UserRole::Admin => 1,
        UserRole::TeamManager => 2,
        UserRole::Member => 3,
    }
}
