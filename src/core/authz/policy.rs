//! Access policy core functionality

use crate::core::models::{Group, Permission, User, UserRole, UserStatus};
use tracing::info;
use uuid::Uuid;

/// Access policy for permission checks
///
/// Holds the single piece of configuration the checks depend on: the
/// owner email whose account bypasses every restriction. Constructed once
/// at startup and shared across handlers.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    /// Email address granted unconditional access, lowercase
    owner_email: Option<String>,
}

impl AccessPolicy {
    /// Create a new access policy
    pub fn new(owner_email: Option<String>) -> Self {
        match &owner_email {
            Some(email) => info!("Access policy initialized with owner override for {}", email),
            None => info!("Access policy initialized without owner override"),
        }
        Self {
            owner_email: owner_email.map(|e| e.to_lowercase()),
        }
    }

    /// Whether this user is the configured owner identity
    ///
    /// Matches on email alone, case-insensitively. Status is deliberately
    /// not consulted: the owner identity must keep access even when the
    /// account record is suspended.
    pub fn has_god_mode(&self, user: Option<&User>) -> bool {
        match (user, &self.owner_email) {
            (Some(user), Some(owner)) => user.email.eq_ignore_ascii_case(owner),
            _ => false,
        }
    }

    /// Check whether `user` holds `permission`, optionally scoped to `resource`
    ///
    /// Evaluation order matters: the owner override is applied before the
    /// status gate, an OWNER role short-circuits the grant scan, and an
    /// absent user always fails.
    pub fn has_permission(
        &self,
        user: Option<&User>,
        permission: Permission,
        resource: Option<&str>,
    ) -> bool {
        let Some(user) = user else {
            return false;
        };

        if self.has_god_mode(Some(user)) {
            return true;
        }

        if user.status != UserStatus::Active {
            return false;
        }

        if user.role == UserRole::Owner {
            return true;
        }

        user.permissions
            .iter()
            .any(|grant| grant.applies_to(permission, resource))
    }

    /// Whether the user may open the admin panel
    pub fn can_access_admin_panel(&self, user: Option<&User>) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        match user {
            Some(user) if matches!(user.role, UserRole::Owner | UserRole::Admin) => true,
            _ => self.has_permission(user, Permission::AdminPanelAccess, None),
        }
    }

    /// Whether the user may manage user accounts
    pub fn can_manage_users(&self, user: Option<&User>) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        match user {
            Some(user) if matches!(user.role, UserRole::Owner | UserRole::Admin) => true,
            _ => self.has_permission(user, Permission::ManageUsers, None),
        }
    }

    /// Whether the user may create groups
    pub fn can_create_groups(&self, user: Option<&User>) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        match user {
            Some(user)
                if matches!(
                    user.role,
                    UserRole::Owner | UserRole::Admin | UserRole::TeamManager
                ) =>
            {
                true
            }
            _ => self.has_permission(user, Permission::CreateGroup, None),
        }
    }

    /// Whether the user may manage the given group
    pub fn can_manage_group(&self, user: Option<&User>, group_id: Uuid) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        let Some(user) = user else {
            return false;
        };
        if matches!(user.role, UserRole::Owner | UserRole::Admin) {
            return true;
        }
        if user.manages_group(group_id) {
            return true;
        }
        if user
            .active_membership(group_id)
            .map(|m| m.can_edit)
            .unwrap_or(false)
        {
            return true;
        }
        let scope = group_id.to_string();
        self.has_permission(Some(user), Permission::ManageGroupMembers, Some(scope.as_str()))
    }

    /// Whether the user may view the given group
    pub fn can_view_group(&self, user: Option<&User>, group: &Group) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        let Some(user) = user else {
            return false;
        };
        if matches!(user.role, UserRole::Owner | UserRole::Admin) {
            return true;
        }
        if group.is_public() {
            return true;
        }
        if user.active_membership(group.id()).is_some() {
            return true;
        }
        group.manager_id == Some(user.id())
    }

    /// Whether the user may invite members into the given group
    pub fn can_invite_to_group(&self, user: Option<&User>, group_id: Uuid) -> bool {
        if self.has_god_mode(user) {
            return true;
        }
        let Some(user) = user else {
            return false;
        };
        if matches!(user.role, UserRole::Owner | UserRole::Admin) {
            return true;
        }
        if user.manages_group(group_id) {
            return true;
        }
        user.active_membership(group_id)
            .map(|m| m.can_invite)
            .unwrap_or(false)
    }

    /// Content-view permissions the user passes
    pub fn accessible_content(&self, user: Option<&User>) -> Vec<Permission> {
        Permission::content_permissions()
            .iter()
            .copied()
            .filter(|&permission| self.has_permission(user, permission, None))
            .collect()
    }

    /// Whether the user is an active owner
    pub fn is_owner(&self, user: Option<&User>) -> bool {
        matches!(user, Some(user) if user.is_active() && user.role == UserRole::Owner)
    }

    /// Whether the user is an active admin (owner included)
    pub fn is_admin(&self, user: Option<&User>) -> bool {
        matches!(
            user,
            Some(user) if user.is_active()
                && matches!(user.role, UserRole::Owner | UserRole::Admin)
        )
    }

    /// Whether the user is an active team manager (or above)
    pub fn is_team_manager(&self, user: Option<&User>) -> bool {
        matches!(
            user,
            Some(user) if user.is_active()
                && matches!(
                    user.role,
                    UserRole::Owner | UserRole::Admin | UserRole::TeamManager
                )
        )
    }

    /// Whether the user is an active member of the platform
    pub fn is_member(&self, user: Option<&User>) -> bool {
        matches!(user, Some(user) if user.is_active())
    }
}
