//! Audit log configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum number of audit entries retained in memory
    #[serde(default = "default_audit_capacity")]
    pub capacity: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            capacity: default_audit_capacity(),
        }
    }
}

#[allow(dead_code)]
impl AuditConfig {
    /// Merge audit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.capacity != default_audit_capacity() {
            self.capacity = other.capacity;
        }
        self
    }

    /// Validate audit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("Audit capacity cannot be 0".to_string());
        }
        Ok(())
    }
}
