//! HTTP middleware implementations
//!
//! This module provides middleware for request processing:
//! - Bearer token authentication
//! - Helpers for reading the authenticated user back out of a request

mod auth;
mod helpers;


// Re-export all middleware
pub use auth::{get_request_user, AuthMiddleware, AuthMiddlewareService};
pub use helpers::{bearer_token, is_public_route, request_origin};
