//! Error types for the portal service

use thiserror::Error;

/// Result type alias for the portal
pub type Result<T> = std::result::Result<T, PortalError>;

/// Main error type for the portal
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum PortalError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Authentication errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authorization errors
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Completion backend errors
    #[error("Completion error: {0}")]
    Completion(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
