//! In-memory group service
//!
//! Groups and their memberships live in separate maps; a group's member
//! count and member list are always derived from ACTIVE memberships.

use crate::core::models::{
    Group, GroupMembership, GroupType, GroupView, GroupVisibility, MembershipStatus,
};
use crate::utils::error::{PortalError, Result};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Fields accepted when creating a group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    /// Group name
    pub name: String,
    /// Group description
    pub description: Option<String>,
    /// Group type
    #[serde(rename = "type")]
    pub kind: GroupType,
    /// Group visibility, private by default
    #[serde(default = "default_visibility")]
    pub visibility: GroupVisibility,
    /// Maximum number of active members
    pub max_members: Option<usize>,
    /// Whether join requests are approved automatically
    #[serde(default)]
    pub auto_approve: bool,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields accepted when updating a group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New type
    #[serde(rename = "type")]
    pub kind: Option<GroupType>,
    /// New visibility
    pub visibility: Option<GroupVisibility>,
    /// New designated manager; must hold an active membership
    pub manager_id: Option<Uuid>,
    /// New active flag
    pub is_active: Option<bool>,
    /// New member limit
    pub max_members: Option<usize>,
    /// New auto-approve flag
    pub auto_approve: Option<bool>,
    /// Replacement tag list
    pub tags: Option<Vec<String>>,
}

/// Filter options for the group list
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListFilter {
    /// Restrict to one type
    #[serde(rename = "type")]
    pub kind: Option<GroupType>,
    /// Restrict to one visibility
    pub visibility: Option<GroupVisibility>,
    /// Active flag to match; defaults to active groups only
    pub is_active: Option<bool>,
    /// Substring match over name, description, and tags
    pub search: Option<String>,
    /// Maximum number of groups returned
    pub limit: Option<usize>,
    /// Number of groups skipped
    pub offset: Option<usize>,
}

/// Fields accepted when adding a group member
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMember {
    /// User joining the group
    pub user_id: Uuid,
    /// Free-form role label within the group
    #[serde(rename = "role")]
    pub member_role: Option<String>,
    /// Whether this member can invite others
    #[serde(default)]
    pub can_invite: bool,
    /// Whether this member can remove others
    #[serde(default)]
    pub can_remove: bool,
    /// Whether this member can edit the group
    #[serde(default)]
    pub can_edit: bool,
}

/// Aggregate group statistics for the admin surface
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnalytics {
    /// Total number of groups
    pub total_groups: usize,
    /// Groups with the active flag set
    pub active_groups: usize,
    /// Group counts per type
    pub groups_by_type: HashMap<String, usize>,
    /// Active memberships across all groups
    pub total_memberships: usize,
}

/// In-memory group store
pub struct GroupService {
    groups: DashMap<Uuid, Group>,
    /// Group id -> memberships of that group
    memberships: DashMap<Uuid, Vec<GroupMembership>>,
}

impl GroupService {
    /// Create an empty group service
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
            memberships: DashMap::new(),
        }
    }

    /// Create a group, adding the creator as its first member
    pub async fn create(&self, created_by: Uuid, data: CreateGroup) -> Result<GroupView> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(PortalError::validation("Group name is required"));
        }

        let mut group = Group::new(name.to_string(), created_by);
        group.description = data.description;
        group.kind = data.kind;
        group.visibility = data.visibility;
        group.max_members = data.max_members;
        group.auto_approve = data.auto_approve;
        group.tags = data.tags;

        let group_id = group.id();
        self.memberships
            .insert(group_id, vec![GroupMembership::creator(group_id, created_by)]);
        self.groups.insert(group_id, group.clone());

        info!("👥 Group created: {} ({})", group.name, group_id);

        Ok(GroupView {
            group,
            member_count: 1,
        })
    }

    /// Look up a group with its member count
    pub async fn get(&self, group_id: Uuid) -> Option<GroupView> {
        let group = self.groups.get(&group_id)?.clone();
        Some(GroupView {
            member_count: self.active_member_count(group_id),
            group,
        })
    }

    /// List groups with filtering, newest first
    pub async fn list(&self, filter: GroupListFilter) -> Vec<GroupView> {
        let search = filter.search.as_deref().map(str::to_lowercase);
        let wanted_active = filter.is_active.unwrap_or(true);

        let mut matches: Vec<Group> = self
            .groups
            .iter()
            .filter(|entry| {
                let group = entry.value();
                if group.is_active != wanted_active {
                    return false;
                }
                if filter.kind.is_some_and(|kind| group.kind != kind) {
                    return false;
                }
                if filter
                    .visibility
                    .is_some_and(|visibility| group.visibility != visibility)
                {
                    return false;
                }
                if let Some(search) = &search {
                    let name_hit = group.name.to_lowercase().contains(search);
                    let description_hit = group
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(search));
                    let tag_hit = group.tags.iter().any(|tag| tag.to_lowercase() == *search);
                    if !name_hit && !description_hit && !tag_hit {
                        return false;
                    }
                }
                true
            })
            .map(|entry| entry.clone())
            .collect();

        matches.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));

        matches
            .into_iter()
            .skip(filter.offset.unwrap_or(0))
            .take(filter.limit.unwrap_or(20))
            .map(|group| GroupView {
                member_count: self.active_member_count(group.id()),
                group,
            })
            .collect()
    }

    /// Apply edits to a group
    pub async fn update(&self, group_id: Uuid, changes: GroupUpdate) -> Result<GroupView> {
        if !self.groups.contains_key(&group_id) {
            return Err(PortalError::not_found("Group not found"));
        }

        if let Some(manager_id) = changes.manager_id {
            if !self.has_active_membership(group_id, manager_id) {
                return Err(PortalError::validation(
                    "Group manager must be an active member of the group",
                ));
            }
        }

        let mut group = self
            .groups
            .get_mut(&group_id)
            .ok_or_else(|| PortalError::not_found("Group not found"))?;

        if let Some(name) = changes.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(PortalError::validation("Group name is required"));
            }
            group.name = name;
        }
        if let Some(description) = changes.description {
            group.description = Some(description);
        }
        if let Some(kind) = changes.kind {
            group.kind = kind;
        }
        if let Some(visibility) = changes.visibility {
            group.visibility = visibility;
        }
        if let Some(manager_id) = changes.manager_id {
            group.manager_id = Some(manager_id);
        }
        if let Some(is_active) = changes.is_active {
            group.is_active = is_active;
        }
        if let Some(max_members) = changes.max_members {
            group.max_members = Some(max_members);
        }
        if let Some(auto_approve) = changes.auto_approve {
            group.auto_approve = auto_approve;
        }
        if let Some(tags) = changes.tags {
            group.tags = tags;
        }
        group.metadata.touch();
        let group = group.clone();

        Ok(GroupView {
            member_count: self.active_member_count(group_id),
            group,
        })
    }

    /// Delete a group and all of its memberships
    pub async fn delete(&self, group_id: Uuid) -> Result<Group> {
        let (_, group) = self
            .groups
            .remove(&group_id)
            .ok_or_else(|| PortalError::not_found("Group not found"))?;
        self.memberships.remove(&group_id);
        Ok(group)
    }

    /// Add a member to a group
    pub async fn add_member(&self, group_id: Uuid, data: AddMember) -> Result<GroupMembership> {
        let max_members = self
            .groups
            .get(&group_id)
            .ok_or_else(|| PortalError::not_found("Group not found"))?
            .max_members;

        let mut members = self.memberships.entry(group_id).or_default();

        if members
            .iter()
            .any(|m| m.user_id == data.user_id && m.is_active())
        {
            return Err(PortalError::conflict(
                "User is already an active member of this group",
            ));
        }

        let active_count = members.iter().filter(|m| m.is_active()).count();
        if max_members.is_some_and(|max| active_count >= max) {
            return Err(PortalError::conflict(
                "Group has reached its maximum member count",
            ));
        }

        let mut membership = GroupMembership::new(group_id, data.user_id);
        membership.member_role = data.member_role;
        membership.can_invite = data.can_invite;
        membership.can_remove = data.can_remove;
        membership.can_edit = data.can_edit;
        members.push(membership.clone());

        Ok(membership)
    }

    /// Mark a member as removed
    pub async fn remove_member(&self, group_id: Uuid, user_id: Uuid) -> Result<()> {
        let mut members = self
            .memberships
            .get_mut(&group_id)
            .ok_or_else(|| PortalError::not_found("Group not found"))?;

        let membership = members
            .iter_mut()
            .find(|m| m.user_id == user_id && m.is_active())
            .ok_or_else(|| PortalError::not_found("Membership not found"))?;

        membership.status = MembershipStatus::Removed;
        membership.metadata.touch();
        Ok(())
    }

    /// Active members of a group, ordered by join time
    pub async fn members(&self, group_id: Uuid) -> Result<Vec<GroupMembership>> {
        if !self.groups.contains_key(&group_id) {
            return Err(PortalError::not_found("Group not found"));
        }

        let mut members: Vec<GroupMembership> = self
            .memberships
            .get(&group_id)
            .map(|members| members.iter().filter(|m| m.is_active()).cloned().collect())
            .unwrap_or_default();
        members.sort_by(|a, b| a.joined_at.cmp(&b.joined_at));
        Ok(members)
    }

    /// A user's active memberships across all groups
    pub async fn user_memberships(&self, user_id: Uuid) -> Vec<GroupMembership> {
        self.memberships
            .iter()
            .flat_map(|entry| {
                entry
                    .value()
                    .iter()
                    .filter(|m| m.user_id == user_id && m.is_active())
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// IDs of groups where the user is the designated manager
    pub async fn managed_group_ids(&self, user_id: Uuid) -> Vec<Uuid> {
        self.groups
            .iter()
            .filter(|entry| entry.value().manager_id == Some(user_id))
            .map(|entry| *entry.key())
            .collect()
    }

    /// Aggregate statistics over all groups
    pub async fn analytics(&self) -> GroupAnalytics {
        let mut groups_by_type: HashMap<String, usize> = HashMap::new();
        let mut total_groups = 0;
        let mut active_groups = 0;

        for entry in self.groups.iter() {
            let group = entry.value();
            total_groups += 1;
            if group.is_active {
                active_groups += 1;
            }
            *groups_by_type.entry(group.kind.to_string()).or_insert(0) += 1;
        }

        let total_memberships = self
            .memberships
            .iter()
            .map(|entry| entry.value().iter().filter(|m| m.is_active()).count())
            .sum();

        GroupAnalytics {
            total_groups,
            active_groups,
            groups_by_type,
            total_memberships,
        }
    }

    fn active_member_count(&self, group_id: Uuid) -> usize {
        self.memberships
            .get(&group_id)
            .map(|members| members.iter().filter(|m| m.is_active()).count())
            .unwrap_or(0)
    }

    fn has_active_membership(&self, group_id: Uuid, user_id: Uuid) -> bool {
        self.memberships
            .get(&group_id)
            .is_some_and(|members| members.iter().any(|m| m.user_id == user_id && m.is_active()))
    }
}

impl Default for GroupService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_visibility() -> GroupVisibility {
    GroupVisibility::Private
}
