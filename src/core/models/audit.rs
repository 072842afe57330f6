//! Audit log models

use super::Metadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded administrative or security-relevant action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Entry metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Acting user
    pub user_id: Uuid,
    /// Action name, e.g. `GROUP_CREATED`
    pub action: String,
    /// Target resource, `"system"` when none applies
    pub target: String,
    /// Structured details
    pub details: serde_json::Value,
    /// Origin IP address
    pub ip_address: Option<String>,
    /// Origin user agent
    pub user_agent: Option<String>,
}

/// Request origin captured for audit entries
#[derive(Debug, Clone, Default)]
pub struct RequestOrigin {
    /// Client IP address
    pub ip_address: Option<String>,
    /// Client user agent
    pub user_agent: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry
    pub fn new(user_id: Uuid, action: String, target: Option<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            user_id,
            action,
            target: target.unwrap_or_else(|| "system".to_string()),
            details: serde_json::Value::Null,
            ip_address: None,
            user_agent: None,
        }
    }

    /// Attach structured details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach the request origin
    pub fn with_origin(mut self, origin: RequestOrigin) -> Self {
        self.ip_address = origin.ip_address;
        self.user_agent = origin.user_agent;
        self
    }
}
