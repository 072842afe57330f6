//! Assistant backend configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Completion backend configuration for the ARIA assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Enable the completion backend
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// API key for the completion backend
    pub api_key: Option<String>,
    /// Base URL of the completion API
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Organization header value (optional)
    pub organization: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            organization: None,
            timeout: default_timeout(),
        }
    }
}

#[allow(dead_code)]
impl AssistantConfig {
    /// Merge assistant configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_base != default_api_base() {
            self.api_base = other.api_base;
        }
        if other.model != default_model() {
            self.model = other.model;
        }
        if other.max_tokens != default_max_tokens() {
            self.max_tokens = other.max_tokens;
        }
        if other.temperature != default_temperature() {
            self.temperature = other.temperature;
        }
        if other.organization.is_some() {
            self.organization = other.organization;
        }
        if other.timeout != default_timeout() {
            self.timeout = other.timeout;
        }
        self
    }

    /// Check if a completion backend can actually be constructed
    pub fn is_configured(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }

    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base.is_empty() {
            return Err("Assistant API base URL cannot be empty".to_string());
        }

        if self.model.is_empty() {
            return Err("Assistant model cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("Assistant max_tokens cannot be 0".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Assistant temperature must be between 0.0 and 2.0".to_string());
        }

        if self.timeout == 0 {
            return Err("Assistant timeout cannot be 0".to_string());
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}
