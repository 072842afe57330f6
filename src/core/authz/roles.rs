//! Default permission grants per role

use crate::core::models::{Permission, PermissionGrant, UserRole};

/// Grants seeded when a user is created or assigned a role
///
/// These populate the explicit grant list; the policy itself never
/// consults this mapping at check time.
pub fn default_permissions_for(role: UserRole) -> Vec<PermissionGrant> {
    let permissions: Vec<Permission> = match role {
        UserRole::Owner => Permission::all().to_vec(),
        UserRole::Admin => vec![
            Permission::AdminPanelAccess,
            Permission::ManageUsers,
            Permission::ViewUserProfiles,
            Permission::AssignRoles,
            Permission::CreateGroup,
            Permission::ManageGroupMembers,
            Permission::ViewAllGroups,
            Permission::AnalyticsAccess,
            Permission::AiTrainingAccess,
            Permission::AiAssessmentAccess,
            Permission::PromptTutorAccess,
        ],
        UserRole::TeamManager => vec![
            Permission::CreateGroup,
            Permission::ManageGroupMembers,
            Permission::ViewUserProfiles,
            Permission::AiTrainingAccess,
            Permission::AiAssessmentAccess,
            Permission::PromptTutorAccess,
        ],
        UserRole::Member => vec![
            Permission::AiTrainingAccess,
            Permission::PromptTutorAccess,
        ],
    };

    permissions
        .into_iter()
        .map(PermissionGrant::global)
        .collect()
}
