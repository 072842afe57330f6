//! Group models for the portal
//!
//! This module defines group and membership data structures.

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group of users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Group name
    pub name: String,
    /// Group description
    pub description: Option<String>,
    /// Group type
    #[serde(rename = "type")]
    pub kind: GroupType,
    /// Group visibility
    pub visibility: GroupVisibility,
    /// Designated manager
    pub manager_id: Option<Uuid>,
    /// User who created the group
    pub created_by: Uuid,
    /// Whether the group is active
    pub is_active: bool,
    /// Maximum number of active members
    pub max_members: Option<usize>,
    /// Whether join requests are approved automatically
    pub auto_approve: bool,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Group type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    /// Organizational department
    Department,
    /// Project team
    Project,
    /// Functional group
    Functional,
    /// Temporary group
    Temporary,
    /// Custom group
    Custom,
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::Department => write!(f, "DEPARTMENT"),
            GroupType::Project => write!(f, "PROJECT"),
            GroupType::Functional => write!(f, "FUNCTIONAL"),
            GroupType::Temporary => write!(f, "TEMPORARY"),
            GroupType::Custom => write!(f, "CUSTOM"),
        }
    }
}

/// Group visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupVisibility {
    /// Viewable by any authenticated user
    Public,
    /// Viewable by members only
    Private,
    /// Viewable by members, invitation required
    Restricted,
}

/// Group membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembership {
    /// Membership metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Group ID
    pub group_id: Uuid,
    /// User ID
    pub user_id: Uuid,
    /// Membership status
    pub status: MembershipStatus,
    /// Free-form role label within the group
    pub member_role: Option<String>,
    /// Joined at
    pub joined_at: chrono::DateTime<chrono::Utc>,
    /// Whether this member can invite others
    pub can_invite: bool,
    /// Whether this member can remove others
    pub can_remove: bool,
    /// Whether this member can edit the group
    pub can_edit: bool,
}

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipStatus {
    /// Active member
    Active,
    /// Awaiting approval
    Pending,
    /// Inactive member
    Inactive,
    /// Removed from the group
    Removed,
}

/// Group with its derived member count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    /// The group
    #[serde(flatten)]
    pub group: Group,
    /// Number of active members
    pub member_count: usize,
}

impl Group {
    /// Create a new group
    pub fn new(name: String, created_by: Uuid) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            description: None,
            kind: GroupType::Custom,
            visibility: GroupVisibility::Private,
            manager_id: None,
            created_by,
            is_active: true,
            max_members: None,
            auto_approve: false,
            tags: vec![],
        }
    }

    /// Get group ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Check if the group is publicly visible
    pub fn is_public(&self) -> bool {
        matches!(self.visibility, GroupVisibility::Public)
    }
}

impl GroupMembership {
    /// Create a new active membership
    pub fn new(group_id: Uuid, user_id: Uuid) -> Self {
        Self {
            metadata: Metadata::new(),
            group_id,
            user_id,
            status: MembershipStatus::Active,
            member_role: None,
            joined_at: chrono::Utc::now(),
            can_invite: false,
            can_remove: false,
            can_edit: false,
        }
    }

    /// Membership created for the group creator, with full flags
    pub fn creator(group_id: Uuid, user_id: Uuid) -> Self {
        let mut membership = Self::new(group_id, user_id);
        membership.member_role = Some("Creator".to_string());
        membership.can_invite = true;
        membership.can_remove = true;
        membership.can_edit = true;
        membership
    }

    /// Check if membership is active
    pub fn is_active(&self) -> bool {
        matches!(self.status, MembershipStatus::Active)
    }
}
