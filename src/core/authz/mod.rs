//! Role-based access control for the portal
//!
//! This module answers allow/deny questions over a user record: role,
//! status, explicit grants, and group relationships. All checks are pure
//! functions of their arguments; nothing here reads ambient state or
//! performs I/O.

mod policy;
mod roles;

// Re-export public types and structs
pub use policy::AccessPolicy;
pub use roles::default_permissions_for;
