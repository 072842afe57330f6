//! Completion backend client
//!
//! Thin reqwest client for an OpenAI-compatible chat completions API.
//! `CompletionBackend` is the seam the orchestration layer talks to, so
//! tests can substitute a mock backend.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::config::AssistantConfig;
use crate::core::models::{BackendHealth, HealthStatus};
use crate::utils::error::{PortalError, Result};

#[cfg(test)]
use mockall::automock;

/// One message in a completion request
#[derive(Debug, Clone, Serialize)]
pub struct CompletionMessage {
    /// Message role: system, user, or assistant
    pub role: &'static str,
    /// Message text
    pub content: String,
}

impl CompletionMessage {
    /// Create a system message
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: "assistant",
            content: content.into(),
        }
    }
}

/// Text-completion provider behind the assistant
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one chat completion over the given messages
    ///
    /// Returns the assistant text, or `None` when the provider answered
    /// without any content.
    async fn complete(&self, messages: Vec<CompletionMessage>) -> Result<Option<String>>;

    /// Probe the provider
    async fn health_check(&self) -> BackendHealth;
}

/// OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    organization: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl CompletionClient {
    /// Create a client from the assistant configuration
    ///
    /// Fails when no API key is configured; callers treat that as the
    /// degraded (no backend) mode rather than an error.
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| PortalError::config("Assistant API key is not configured"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| PortalError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            organization: config.organization.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("Authorization", format!("Bearer {}", self.api_key));
        match &self.organization {
            Some(org) => request.header("OpenAI-Organization", org),
            None => request,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, messages: Vec<CompletionMessage>) -> Result<Option<String>> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let response = self
            .authorized(self.client.post(&url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| PortalError::completion(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PortalError::completion(format!(
                "Completion request failed with status {}: {}",
                status, error_text
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| PortalError::completion(format!("Failed to parse completion: {}", e)))?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        Ok(content)
    }

    async fn health_check(&self) -> BackendHealth {
        let url = format!("{}/models", self.api_base);
        let result = self.authorized(self.client.get(&url)).send().await;

        let (status, error_message) = match result {
            Ok(response) if response.status().is_success() => (HealthStatus::Healthy, None),
            Ok(response) => (
                HealthStatus::Unhealthy,
                Some(format!("Provider returned status {}", response.status())),
            ),
            Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
        };

        BackendHealth {
            status,
            configured: true,
            last_check: chrono::Utc::now(),
            error_message,
        }
    }
}
