//! Access policy integration tests
//!
//! Tests for permission checks over real user records: role shortcuts,
//! explicit grants, scoped grants, the status gate, and the owner
//! override.

#[cfg(test)]
mod tests {
    use crate::common::assertions::PolicyAssertions;
    use crate::common::fixtures::UserFactory;
    use uuid::Uuid;
    use workbench_rs::core::models::{Group, GroupMembership, GroupVisibility, MembershipStatus};
    use workbench_rs::{default_permissions_for, AccessPolicy, Permission, PermissionGrant, UserRole, UserStatus};

    fn policy() -> AccessPolicy {
        AccessPolicy::new(None)
    }

    // ==================== Role Shortcuts ====================

    /// Test that an owner passes every permission check
    #[test]
    fn test_owner_role_passes_everything() {
        let policy = policy();
        let owner = UserFactory::owner();

        for &permission in Permission::all() {
            policy.assert_grants(&owner, permission);
        }
    }

    /// Test that a member is denied management permissions
    #[test]
    fn test_member_denied_management() {
        let policy = policy();
        let member = UserFactory::member();

        policy.assert_denies(&member, Permission::ManageUsers);
        policy.assert_denies(&member, Permission::AdminPanelAccess);
        policy.assert_denies(&member, Permission::CreateGroup);
        assert!(!policy.can_manage_users(Some(&member)));
        assert!(!policy.can_access_admin_panel(Some(&member)));
        assert!(!policy.can_create_groups(Some(&member)));
    }

    /// Test that an admin reaches the admin surfaces without the owner role
    #[test]
    fn test_admin_role_reaches_admin_surfaces() {
        let policy = policy();
        let admin = UserFactory::admin();

        assert!(policy.can_access_admin_panel(Some(&admin)));
        assert!(policy.can_manage_users(Some(&admin)));
        assert!(policy.can_create_groups(Some(&admin)));
        assert!(!policy.is_owner(Some(&admin)));
        assert!(policy.is_admin(Some(&admin)));
    }

    /// Test that a team manager can create groups but not manage users
    #[test]
    fn test_team_manager_splits_group_and_user_rights() {
        let policy = policy();
        let manager = UserFactory::team_manager();

        assert!(policy.can_create_groups(Some(&manager)));
        assert!(!policy.can_manage_users(Some(&manager)));
        assert!(!policy.can_access_admin_panel(Some(&manager)));
        assert!(policy.is_team_manager(Some(&manager)));
    }

    /// Test that an absent user fails every check
    #[test]
    fn test_no_user_fails_every_check() {
        let policy = policy();

        assert!(!policy.has_permission(None, Permission::CreateGroup, None));
        assert!(!policy.can_manage_users(None));
        assert!(!policy.can_access_admin_panel(None));
        assert!(!policy.is_member(None));
    }

    // ==================== Explicit Grants ====================

    /// Test that an explicit grant opens a check the role would fail
    #[test]
    fn test_explicit_grant_beats_role_default() {
        let policy = policy();
        let member =
            UserFactory::with_grants(vec![PermissionGrant::global(Permission::CreateGroup)]);

        policy.assert_grants(&member, Permission::CreateGroup);
        assert!(policy.can_create_groups(Some(&member)));
        policy.assert_denies(&member, Permission::ManageUsers);
    }

    /// Test that a scoped grant applies only to its resource
    #[test]
    fn test_scoped_grant_is_resource_bound() {
        let policy = policy();
        let group_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();
        let member = UserFactory::with_grants(vec![PermissionGrant::scoped(
            Permission::ManageGroupMembers,
            group_id.to_string(),
        )]);

        assert!(policy.has_permission(
            Some(&member),
            Permission::ManageGroupMembers,
            Some(group_id.to_string().as_str())
        ));
        assert!(!policy.has_permission(
            Some(&member),
            Permission::ManageGroupMembers,
            Some(other_id.to_string().as_str())
        ));
        assert!(policy.can_manage_group(Some(&member), group_id));
        assert!(!policy.can_manage_group(Some(&member), other_id));
    }

    /// Test that a global grant covers any resource
    #[test]
    fn test_global_grant_covers_scoped_checks() {
        let policy = policy();
        let member = UserFactory::with_grants(vec![PermissionGrant::global(
            Permission::ManageGroupMembers,
        )]);

        assert!(policy.has_permission(
            Some(&member),
            Permission::ManageGroupMembers,
            Some("any-resource")
        ));
    }

    // ==================== Status Gate ====================

    /// Test that suspension blocks role and grant checks alike
    #[test]
    fn test_suspension_blocks_grants_and_roles() {
        let policy = policy();

        let mut admin = UserFactory::admin();
        admin.status = UserStatus::Suspended;
        policy.assert_denies(&admin, Permission::ManageUsers);
        assert!(!policy.is_admin(Some(&admin)));

        let mut granted = UserFactory::with_grants(vec![PermissionGrant::global(
            Permission::CreateGroup,
        )]);
        granted.status = UserStatus::Inactive;
        policy.assert_denies(&granted, Permission::CreateGroup);
    }

    // ==================== Owner Override ====================

    /// Test that the configured owner email bypasses everything
    #[test]
    fn test_owner_email_overrides_role_and_status() {
        let policy = AccessPolicy::new(Some("boss@boldbusiness.com".to_string()));
        let mut user = UserFactory::with_email("boss@boldbusiness.com");
        user.permissions.clear();
        user.status = UserStatus::Suspended;

        assert!(policy.has_god_mode(Some(&user)));
        policy.assert_grants(&user, Permission::ManageUsers);
        assert!(policy.can_access_admin_panel(Some(&user)));
        assert!(policy.can_manage_group(Some(&user), Uuid::new_v4()));
    }

    /// Test that the owner email matches case-insensitively
    #[test]
    fn test_owner_email_match_ignores_case() {
        let policy = AccessPolicy::new(Some("Boss@BoldBusiness.com".to_string()));
        let user = UserFactory::with_email("boss@boldbusiness.com");

        assert!(policy.has_god_mode(Some(&user)));
    }

    /// Test that other users are unaffected by the owner override
    #[test]
    fn test_owner_override_is_not_contagious() {
        let policy = AccessPolicy::new(Some("boss@boldbusiness.com".to_string()));
        let member = UserFactory::member();

        assert!(!policy.has_god_mode(Some(&member)));
        policy.assert_denies(&member, Permission::ManageUsers);
    }

    // ==================== Group Visibility ====================

    /// Test that public groups are visible to any active user
    #[test]
    fn test_public_group_visible_to_members() {
        let policy = policy();
        let member = UserFactory::member();
        let mut group = Group::new("All Hands".to_string(), Uuid::new_v4());
        group.visibility = GroupVisibility::Public;

        assert!(policy.can_view_group(Some(&member), &group));
    }

    /// Test that private groups hide from non-members
    #[test]
    fn test_private_group_hidden_from_outsiders() {
        let policy = policy();
        let member = UserFactory::member();
        let group = Group::new("Leadership".to_string(), Uuid::new_v4());

        assert!(!policy.can_view_group(Some(&member), &group));
        assert!(policy.can_view_group(Some(&UserFactory::admin()), &group));
    }

    /// Test that an active membership makes a private group visible
    #[test]
    fn test_membership_opens_private_group() {
        let policy = policy();
        let mut member = UserFactory::member();
        let group = Group::new("Leadership".to_string(), Uuid::new_v4());
        member
            .group_memberships
            .push(GroupMembership::new(group.id(), member.id()));

        assert!(policy.can_view_group(Some(&member), &group));
    }

    /// Test that a removed membership no longer opens the group
    #[test]
    fn test_removed_membership_does_not_count() {
        let policy = policy();
        let mut member = UserFactory::member();
        let group = Group::new("Leadership".to_string(), Uuid::new_v4());
        let mut membership = GroupMembership::new(group.id(), member.id());
        membership.status = MembershipStatus::Removed;
        member.group_memberships.push(membership);

        assert!(!policy.can_view_group(Some(&member), &group));
    }

    /// Test that membership edit flags confer group management
    #[test]
    fn test_edit_flag_confers_group_management() {
        let policy = policy();
        let mut member = UserFactory::member();
        let group_id = Uuid::new_v4();
        let mut membership = GroupMembership::new(group_id, member.id());
        membership.can_edit = true;
        member.group_memberships.push(membership);

        assert!(policy.can_manage_group(Some(&member), group_id));
        assert!(!policy.can_manage_group(Some(&member), Uuid::new_v4()));
    }

    /// Test that the invite flag is honored separately from edit
    #[test]
    fn test_invite_flag_is_separate_from_edit() {
        let policy = policy();
        let mut member = UserFactory::member();
        let group_id = Uuid::new_v4();
        let mut membership = GroupMembership::new(group_id, member.id());
        membership.can_invite = true;
        member.group_memberships.push(membership);

        assert!(policy.can_invite_to_group(Some(&member), group_id));
        assert!(!policy.can_manage_group(Some(&member), group_id));
    }

    // ==================== Content Access ====================

    /// Test that accessible content follows the grant list
    #[test]
    fn test_accessible_content_follows_grants() {
        let policy = policy();
        let member = UserFactory::with_grants(vec![
            PermissionGrant::global(Permission::ViewHrContent),
            PermissionGrant::global(Permission::ViewItContent),
        ]);

        let content = policy.accessible_content(Some(&member));
        assert_eq!(
            content,
            vec![Permission::ViewHrContent, Permission::ViewItContent]
        );
        assert!(policy.accessible_content(Some(&UserFactory::member())).is_empty());
    }

    // ==================== Role Defaults ====================

    /// Test the seeded grants per role
    #[test]
    fn test_role_default_grants() {
        let owner = default_permissions_for(UserRole::Owner);
        assert_eq!(owner.len(), Permission::all().len());

        let admin = default_permissions_for(UserRole::Admin);
        assert!(admin
            .iter()
            .any(|g| g.applies_to(Permission::AdminPanelAccess, None)));
        assert!(admin
            .iter()
            .any(|g| g.applies_to(Permission::ManageUsers, None)));

        let manager = default_permissions_for(UserRole::TeamManager);
        assert!(manager
            .iter()
            .any(|g| g.applies_to(Permission::CreateGroup, None)));
        assert!(!manager
            .iter()
            .any(|g| g.applies_to(Permission::ManageUsers, None)));

        let member = default_permissions_for(UserRole::Member);
        assert!(member
            .iter()
            .any(|g| g.applies_to(Permission::AiTrainingAccess, None)));
        assert!(!member
            .iter()
            .any(|g| g.applies_to(Permission::CreateGroup, None)));
    }
}
