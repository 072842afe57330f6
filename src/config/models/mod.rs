//! Configuration data models
//!
//! This module defines all configuration structures used throughout the portal.

#![allow(missing_docs)]

pub mod assistant;
pub mod audit;
pub mod auth;
pub mod portal;
pub mod server;

// Re-export all configuration types
pub use assistant::*;
pub use audit::*;
pub use auth::*;
pub use portal::*;
pub use server::*;

use crate::core::models::UserRole;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub fn default_jwt_expiration() -> u64 {
    86400 // 24 hours
}

pub fn default_email_domain() -> String {
    "boldbusiness.com".to_string()
}

pub fn default_role() -> UserRole {
    UserRole::Member
}

pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_max_tokens() -> u32 {
    300
}

pub fn default_temperature() -> f64 {
    0.7
}

pub fn default_audit_capacity() -> usize {
    1000
}
