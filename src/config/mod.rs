//! Configuration management for the portal
//!
//! This module handles loading, validation, and management of all portal configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{PortalError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the portal
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Portal configuration
    pub portal: PortalConfig,
}

#[allow(dead_code)]
impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortalError::Config(format!("Failed to read config file: {}", e)))?;

        let portal: PortalConfig = serde_yaml::from_str(&content)
            .map_err(|e| PortalError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { portal };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load a configuration overlay from environment variables
    ///
    /// The result is merged over a base configuration and is not
    /// validated on its own.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let portal = PortalConfig::from_env()?;
        Ok(Self { portal })
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.portal.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.portal.auth
    }

    /// Get assistant configuration
    pub fn assistant(&self) -> &AssistantConfig {
        &self.portal.assistant
    }

    /// Get audit configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.portal.audit
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        // Validate server configuration
        self.portal
            .server
            .validate()
            .map_err(|e| PortalError::Config(format!("Server config error: {}", e)))?;

        // Validate auth configuration
        self.portal
            .auth
            .validate()
            .map_err(|e| PortalError::Config(format!("Auth config error: {}", e)))?;

        // Validate CORS configuration
        self.portal
            .server
            .cors
            .validate()
            .map_err(|e| PortalError::Config(format!("CORS config error: {}", e)))?;

        // Validate assistant configuration
        self.portal
            .assistant
            .validate()
            .map_err(|e| PortalError::Config(format!("Assistant config error: {}", e)))?;

        // Validate audit configuration
        self.portal
            .audit
            .validate()
            .map_err(|e| PortalError::Config(format!("Audit config error: {}", e)))?;

        // Warn about insecure configurations
        crate::config::models::auth::warn_insecure_config(&self.portal.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.portal = self.portal.merge(other.portal);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.portal)
            .map_err(|e| PortalError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.portal)
            .map_err(|e| PortalError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
