//! Services module
//!
//! This module contains business logic and service implementations

pub mod audit;
pub mod groups;
pub mod resources;
pub mod users;

pub use audit::AuditLog;
pub use groups::{AddMember, CreateGroup, GroupAnalytics, GroupListFilter, GroupService, GroupUpdate};
pub use resources::{can_view_document, ResourceLibrary};
pub use users::{
    GoogleProfile, UserAnalytics, UserDirectory, UserListFilter, UserPage, UserUpdate,
};

use crate::config::Config;
use crate::core::models::User;
use std::sync::Arc;

/// All portal services, shared across request handlers
#[derive(Clone)]
pub struct Services {
    /// User directory
    pub users: Arc<UserDirectory>,
    /// Group service
    pub groups: Arc<GroupService>,
    /// Audit log
    pub audit: Arc<AuditLog>,
    /// Resource library
    pub resources: Arc<ResourceLibrary>,
}

impl Services {
    /// Create all services from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            users: Arc::new(UserDirectory::new(config.auth())),
            groups: Arc::new(GroupService::new()),
            audit: Arc::new(AuditLog::new(config.audit())),
            resources: Arc::new(ResourceLibrary::new()),
        }
    }

    /// Fill in the group-derived fields of a user record
    ///
    /// Memberships and managed groups live in the group service; the
    /// access policy reads them off the user, so they are attached
    /// whenever a user record leaves the directory.
    pub async fn hydrate(&self, user: &mut User) {
        user.group_memberships = self.groups.user_memberships(user.id()).await;
        user.managed_groups = self.groups.managed_group_ids(user.id()).await;
    }
}
