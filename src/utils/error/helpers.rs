//! Helper methods for error creation

use super::types::PortalError;

impl PortalError {
    /// Create a configuration error
    #[allow(dead_code)]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create an unauthorized error
    #[allow(dead_code)]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a forbidden error
    #[allow(dead_code)]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a validation error
    #[allow(dead_code)]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a bad request error
    #[allow(dead_code)]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a not found error
    #[allow(dead_code)]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a conflict error
    #[allow(dead_code)]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a completion backend error
    #[allow(dead_code)]
    pub fn completion<S: Into<String>>(message: S) -> Self {
        Self::Completion(message.into())
    }

    /// Create an internal server error
    #[allow(dead_code)]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
