//! Main portal configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main portal configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Assistant backend configuration
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

#[allow(dead_code)]
impl PortalConfig {
    /// Build a configuration overlay from environment variables
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        // An empty secret is treated as unset by merge()
        config.auth.jwt_secret = String::new();

        if let Ok(host) = std::env::var("PORTAL_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORTAL_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| crate::utils::error::PortalError::config(format!("Invalid PORTAL_PORT: {}", e)))?;
        }
        if let Ok(secret) = std::env::var("PORTAL_JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Ok(domain) = std::env::var("PORTAL_ALLOWED_DOMAIN") {
            config.auth.allowed_email_domain = domain;
        }
        config.auth.owner_email = std::env::var("PORTAL_OWNER_EMAIL")
            .ok()
            .or(config.auth.owner_email);
        config.assistant.api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .or(config.assistant.api_key);
        if let Ok(api_base) = std::env::var("OPENAI_API_BASE") {
            config.assistant.api_base = api_base;
        }
        config.assistant.organization = std::env::var("OPENAI_ORGANIZATION")
            .ok()
            .or(config.assistant.organization);
        if let Ok(model) = std::env::var("PORTAL_ASSISTANT_MODEL") {
            config.assistant.model = model;
        }

        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.auth = self.auth.merge(other.auth);
        self.assistant = self.assistant.merge(other.assistant);
        self.audit = self.audit.merge(other.audit);
        self
    }
}
