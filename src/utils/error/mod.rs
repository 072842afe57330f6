//! Error handling for the portal
//!
//! Defines the error taxonomy used throughout the service and its HTTP
//! response mapping.

pub mod helpers;
pub mod response;
pub mod types;


pub use response::{ErrorDetail, ErrorResponse};
pub use types::{PortalError, Result};
