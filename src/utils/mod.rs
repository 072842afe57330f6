//! Utility modules for the portal
//!
//! ## Module Organization
//!
//! - **error**: Error handling and HTTP response mapping

pub mod error;

pub use error::{PortalError, Result};
