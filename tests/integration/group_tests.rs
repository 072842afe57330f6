//! Group service integration tests
//!
//! Exercises group lifecycle, membership flags, and how group state
//! feeds the authorization policy through hydration.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{GroupFactory, ProfileFactory, UserFactory};
    use workbench_rs::config::Config;
    use workbench_rs::core::models::{GroupVisibility, MembershipStatus};
    use workbench_rs::services::{AddMember, GroupListFilter, GroupService, GroupUpdate, Services};
    use workbench_rs::{AccessPolicy, PortalError};

    fn join(user_id: uuid::Uuid) -> AddMember {
        AddMember {
            user_id,
            member_role: None,
            can_invite: false,
            can_remove: false,
            can_edit: false,
        }
    }

    // ==================== Creation ====================

    /// Test that the creator joins with full membership flags
    #[tokio::test]
    async fn test_creator_membership_has_full_flags() {
        let service = GroupService::new();
        let creator = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::department("Platform"))
            .await
            .unwrap();
        assert_eq!(view.member_count, 1);

        let members = service.members(view.group.id()).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user_id, creator.id());
        assert_eq!(members[0].member_role.as_deref(), Some("Creator"));
        assert!(members[0].can_invite);
        assert!(members[0].can_remove);
        assert!(members[0].can_edit);
    }

    /// Test that a blank name fails validation
    #[tokio::test]
    async fn test_blank_name_fails_validation() {
        let service = GroupService::new();
        let payload = GroupFactory::department("   ");

        let err = service
            .create(UserFactory::member().id(), payload)
            .await
            .unwrap_err();

        assert!(matches!(err, PortalError::Validation(_)));
    }

    // ==================== Membership and Policy ====================

    /// Test that joining a private group makes it visible
    #[tokio::test]
    async fn test_membership_opens_a_private_group() {
        let service = GroupService::new();
        let policy = AccessPolicy::new(None);
        let creator = UserFactory::member();
        let mut outsider = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::department("Hidden"))
            .await
            .unwrap();
        let group_id = view.group.id();
        assert!(!policy.can_view_group(Some(&outsider), &view.group));

        service.add_member(group_id, join(outsider.id())).await.unwrap();
        outsider.group_memberships = service.user_memberships(outsider.id()).await;

        let group = service.get(group_id).await.unwrap().group;
        assert!(policy.can_view_group(Some(&outsider), &group));
    }

    /// Test that the edit flag confers group management
    #[tokio::test]
    async fn test_edit_flag_confers_management() {
        let service = GroupService::new();
        let policy = AccessPolicy::new(None);
        let creator = UserFactory::member();
        let mut editor = UserFactory::member();
        let mut reader = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::public_project("Docs"))
            .await
            .unwrap();
        let group_id = view.group.id();

        service
            .add_member(
                group_id,
                AddMember {
                    can_edit: true,
                    ..join(editor.id())
                },
            )
            .await
            .unwrap();
        service.add_member(group_id, join(reader.id())).await.unwrap();

        editor.group_memberships = service.user_memberships(editor.id()).await;
        reader.group_memberships = service.user_memberships(reader.id()).await;

        assert!(policy.can_manage_group(Some(&editor), group_id));
        assert!(!policy.can_manage_group(Some(&reader), group_id));
    }

    /// Test that the designated manager must already be a member
    #[tokio::test]
    async fn test_manager_must_hold_a_membership() {
        let service = GroupService::new();
        let creator = UserFactory::member();
        let candidate = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::department("Managed"))
            .await
            .unwrap();
        let group_id = view.group.id();

        let err = service
            .update(
                group_id,
                GroupUpdate {
                    manager_id: Some(candidate.id()),
                    ..GroupUpdate::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));

        service.add_member(group_id, join(candidate.id())).await.unwrap();
        let updated = service
            .update(
                group_id,
                GroupUpdate {
                    manager_id: Some(candidate.id()),
                    ..GroupUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.group.manager_id, Some(candidate.id()));
        assert_eq!(
            service.managed_group_ids(candidate.id()).await,
            vec![group_id]
        );
    }

    /// Test that a designated manager can manage after hydration
    #[tokio::test]
    async fn test_manager_can_manage_after_hydration() {
        let service = GroupService::new();
        let policy = AccessPolicy::new(None);
        let creator = UserFactory::member();
        let mut manager = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::department("Ops"))
            .await
            .unwrap();
        let group_id = view.group.id();
        service.add_member(group_id, join(manager.id())).await.unwrap();
        service
            .update(
                group_id,
                GroupUpdate {
                    manager_id: Some(manager.id()),
                    ..GroupUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!(!policy.can_manage_group(Some(&manager), group_id));

        manager.managed_groups = service.managed_group_ids(manager.id()).await;
        assert!(policy.can_manage_group(Some(&manager), group_id));
    }

    /// Test that removal closes a private group again
    #[tokio::test]
    async fn test_removal_closes_the_group_again() {
        let service = GroupService::new();
        let policy = AccessPolicy::new(None);
        let creator = UserFactory::member();
        let mut member = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::department("Revolving"))
            .await
            .unwrap();
        let group_id = view.group.id();
        service.add_member(group_id, join(member.id())).await.unwrap();

        service.remove_member(group_id, member.id()).await.unwrap();
        member.group_memberships = service.user_memberships(member.id()).await;

        assert!(member.group_memberships.is_empty());
        let group = service.get(group_id).await.unwrap().group;
        assert!(!policy.can_view_group(Some(&member), &group));
        assert_eq!(service.get(group_id).await.unwrap().member_count, 1);
    }

    /// Test that the member cap counts active memberships only
    #[tokio::test]
    async fn test_member_cap_counts_active_members() {
        let service = GroupService::new();
        let creator = UserFactory::member();
        let second = UserFactory::member();
        let third = UserFactory::member();

        let view = service
            .create(creator.id(), GroupFactory::capped("Tiny", 2))
            .await
            .unwrap();
        let group_id = view.group.id();

        service.add_member(group_id, join(second.id())).await.unwrap();
        let err = service
            .add_member(group_id, join(third.id()))
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::Conflict(_)));

        // A removed seat frees a slot
        service.remove_member(group_id, second.id()).await.unwrap();
        service.add_member(group_id, join(third.id())).await.unwrap();

        let members = service.members(group_id).await.unwrap();
        assert_eq!(members.len(), 2);
        assert!(members.iter().all(|m| m.status == MembershipStatus::Active));
    }

    // ==================== Listing ====================

    /// Test that deactivated groups drop out of the default listing
    #[tokio::test]
    async fn test_deactivated_groups_leave_the_listing() {
        let service = GroupService::new();
        let creator = UserFactory::member();

        let kept = service
            .create(creator.id(), GroupFactory::department("Kept"))
            .await
            .unwrap();
        let dropped = service
            .create(creator.id(), GroupFactory::department("Dropped"))
            .await
            .unwrap();
        service
            .update(
                dropped.group.id(),
                GroupUpdate {
                    is_active: Some(false),
                    ..GroupUpdate::default()
                },
            )
            .await
            .unwrap();

        let listed = service.list(GroupListFilter::default()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].group.id(), kept.group.id());

        let archived = service
            .list(GroupListFilter {
                is_active: Some(false),
                ..GroupListFilter::default()
            })
            .await;
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].group.id(), dropped.group.id());
    }

    /// Test visibility filtering
    #[tokio::test]
    async fn test_listing_filters_by_visibility() {
        let service = GroupService::new();
        let creator = UserFactory::member();

        service
            .create(creator.id(), GroupFactory::department("Private Dept"))
            .await
            .unwrap();
        service
            .create(creator.id(), GroupFactory::public_project("Open Project"))
            .await
            .unwrap();

        let public = service
            .list(GroupListFilter {
                visibility: Some(GroupVisibility::Public),
                ..GroupListFilter::default()
            })
            .await;

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].group.name, "Open Project");
    }

    // ==================== Hydration ====================

    /// Test that hydrate attaches memberships and managed groups
    #[tokio::test]
    async fn test_hydrate_attaches_group_state() {
        let services = Services::new(&Config::default());
        let mut user = services
            .users
            .upsert_from_auth(ProfileFactory::create())
            .await
            .unwrap();

        let view = services
            .groups
            .create(user.id(), GroupFactory::department("Mine"))
            .await
            .unwrap();
        services
            .groups
            .update(
                view.group.id(),
                GroupUpdate {
                    manager_id: Some(user.id()),
                    ..GroupUpdate::default()
                },
            )
            .await
            .unwrap();

        assert!(user.group_memberships.is_empty());
        services.hydrate(&mut user).await;

        assert_eq!(user.group_memberships.len(), 1);
        assert_eq!(user.group_memberships[0].group_id, view.group.id());
        assert_eq!(user.managed_groups, vec![view.group.id()]);
    }
}
