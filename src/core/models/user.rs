//! User models for the portal
//!
//! This module defines user-related data structures, including the
//! permission grants evaluated by the access policy.

use super::Metadata;
use super::group::GroupMembership;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Email address (unique, lowercase)
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Avatar image URL
    pub image: Option<String>,
    /// User role
    pub role: UserRole,
    /// User status
    pub status: UserStatus,
    /// Associated team ID
    pub team_id: Option<Uuid>,
    /// Country code, used by the resource library
    pub country: Option<String>,
    /// Explicit permission grants
    pub permissions: Vec<PermissionGrant>,
    /// Group memberships
    #[serde(default)]
    pub group_memberships: Vec<GroupMembership>,
    /// IDs of groups this user manages
    #[serde(default)]
    pub managed_groups: Vec<Uuid>,
    /// Last login timestamp
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Total number of logins
    pub login_count: u64,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Platform owner
    Owner,
    /// Administrator
    Admin,
    /// Team manager
    TeamManager,
    /// Regular member
    Member,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Owner => write!(f, "OWNER"),
            UserRole::Admin => write!(f, "ADMIN"),
            UserRole::TeamManager => write!(f, "TEAM_MANAGER"),
            UserRole::Member => write!(f, "MEMBER"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWNER" => Ok(UserRole::Owner),
            "ADMIN" => Ok(UserRole::Admin),
            "TEAM_MANAGER" => Ok(UserRole::TeamManager),
            "MEMBER" => Ok(UserRole::Member),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// User status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Active user
    Active,
    /// Deactivated user (soft delete)
    Inactive,
    /// Suspended user
    Suspended,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Inactive => write!(f, "INACTIVE"),
            UserStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

/// Permission names understood by the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // Group management
    CreateGroup,
    DeleteGroup,
    EditGroup,
    ManageGroupMembers,
    ViewAllGroups,
    // User management
    ManageUsers,
    ViewUserProfiles,
    AssignRoles,
    // Content access
    ViewHrContent,
    ViewItContent,
    ViewFinanceContent,
    ViewMarketingContent,
    ViewAdminContent,
    // System administration
    AdminPanelAccess,
    SystemSettings,
    AnalyticsAccess,
    // AI features
    AiTrainingAccess,
    AiAssessmentAccess,
    PromptTutorAccess,
}

impl Permission {
    /// All known permissions
    pub fn all() -> &'static [Permission] {
        &[
            Permission::CreateGroup,
            Permission::DeleteGroup,
            Permission::EditGroup,
            Permission::ManageGroupMembers,
            Permission::ViewAllGroups,
            Permission::ManageUsers,
            Permission::ViewUserProfiles,
            Permission::AssignRoles,
            Permission::ViewHrContent,
            Permission::ViewItContent,
            Permission::ViewFinanceContent,
            Permission::ViewMarketingContent,
            Permission::ViewAdminContent,
            Permission::AdminPanelAccess,
            Permission::SystemSettings,
            Permission::AnalyticsAccess,
            Permission::AiTrainingAccess,
            Permission::AiAssessmentAccess,
            Permission::PromptTutorAccess,
        ]
    }

    /// Content-view permissions, in display order
    pub fn content_permissions() -> &'static [Permission] {
        &[
            Permission::ViewHrContent,
            Permission::ViewItContent,
            Permission::ViewFinanceContent,
            Permission::ViewMarketingContent,
            Permission::ViewAdminContent,
        ]
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Permission::CreateGroup => "CREATE_GROUP",
            Permission::DeleteGroup => "DELETE_GROUP",
            Permission::EditGroup => "EDIT_GROUP",
            Permission::ManageGroupMembers => "MANAGE_GROUP_MEMBERS",
            Permission::ViewAllGroups => "VIEW_ALL_GROUPS",
            Permission::ManageUsers => "MANAGE_USERS",
            Permission::ViewUserProfiles => "VIEW_USER_PROFILES",
            Permission::AssignRoles => "ASSIGN_ROLES",
            Permission::ViewHrContent => "VIEW_HR_CONTENT",
            Permission::ViewItContent => "VIEW_IT_CONTENT",
            Permission::ViewFinanceContent => "VIEW_FINANCE_CONTENT",
            Permission::ViewMarketingContent => "VIEW_MARKETING_CONTENT",
            Permission::ViewAdminContent => "VIEW_ADMIN_CONTENT",
            Permission::AdminPanelAccess => "ADMIN_PANEL_ACCESS",
            Permission::SystemSettings => "SYSTEM_SETTINGS",
            Permission::AnalyticsAccess => "ANALYTICS_ACCESS",
            Permission::AiTrainingAccess => "AI_TRAINING_ACCESS",
            Permission::AiAssessmentAccess => "AI_ASSESSMENT_ACCESS",
            Permission::PromptTutorAccess => "PROMPT_TUTOR_ACCESS",
        };
        write!(f, "{}", name)
    }
}

/// An explicit permission grant, optionally scoped to a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Granted permission
    pub permission: Permission,
    /// Resource scope; `None` or `"*"` applies everywhere
    pub resource: Option<String>,
}

impl PermissionGrant {
    /// Create an unscoped grant
    pub fn global(permission: Permission) -> Self {
        Self {
            permission,
            resource: None,
        }
    }

    /// Create a grant scoped to a single resource
    pub fn scoped<S: Into<String>>(permission: Permission, resource: S) -> Self {
        Self {
            permission,
            resource: Some(resource.into()),
        }
    }

    /// Whether this grant satisfies a check for `permission` on `resource`
    pub fn applies_to(&self, permission: Permission, resource: Option<&str>) -> bool {
        if self.permission != permission {
            return false;
        }
        match resource {
            None => true,
            Some(requested) => match self.resource.as_deref() {
                None | Some("*") => true,
                Some(scope) => scope == requested,
            },
        }
    }
}

impl User {
    /// Create a new user
    pub fn new(email: String, role: UserRole) -> Self {
        Self {
            metadata: Metadata::new(),
            email: email.to_lowercase(),
            name: None,
            image: None,
            role,
            status: UserStatus::Active,
            team_id: None,
            country: None,
            permissions: vec![],
            group_memberships: vec![],
            managed_groups: vec![],
            last_login_at: None,
            login_count: 0,
        }
    }

    /// Get user ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Check if user is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }

    /// Country used for resource access, defaulting to US
    pub fn country_or_default(&self) -> &str {
        self.country.as_deref().unwrap_or("US")
    }

    /// Active membership of the given group, if any
    pub fn active_membership(&self, group_id: Uuid) -> Option<&GroupMembership> {
        self.group_memberships
            .iter()
            .find(|m| m.group_id == group_id && m.is_active())
    }

    /// Check if this user manages the given group
    pub fn manages_group(&self, group_id: Uuid) -> bool {
        self.managed_groups.contains(&group_id)
    }

    /// Record a successful login
    pub fn record_login(&mut self) {
        self.last_login_at = Some(chrono::Utc::now());
        self.login_count += 1;
        self.metadata.touch();
    }
}
