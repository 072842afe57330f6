//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::JwtHandler;
use crate::config::Config;
use crate::core::assistant::{AssistantService, CompletionBackend, CompletionClient};
use crate::core::authz::AccessPolicy;
use crate::services::Services;
use std::sync::Arc;
use tracing::warn;

/// HTTP server state shared across handlers
///
/// This struct contains shared resources that need to be accessed across
/// multiple request handlers. All fields are wrapped in Arc for efficient
/// sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Portal configuration (shared read-only)
    pub config: Arc<Config>,
    /// Access policy evaluating permission checks
    pub policy: Arc<AccessPolicy>,
    /// Session token handler
    pub jwt: Arc<JwtHandler>,
    /// Business services
    pub services: Services,
    /// Chat assistant
    pub assistant: Arc<AssistantService>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Self {
        let policy = AccessPolicy::new(config.auth().owner_email.clone());
        let jwt = JwtHandler::new(config.auth());
        let services = Services::new(&config);

        let backend: Option<Arc<dyn CompletionBackend>> = if config.assistant().is_configured() {
            match CompletionClient::new(config.assistant()) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("Failed to create completion client: {}", e);
                    None
                }
            }
        } else {
            None
        };
        let assistant = AssistantService::new(backend);

        Self {
            config: Arc::new(config),
            policy: Arc::new(policy),
            jwt: Arc::new(jwt),
            services,
            assistant: Arc::new(assistant),
        }
    }

    /// Get portal configuration
    #[allow(dead_code)] // May be used by handlers
    pub fn config(&self) -> &Config {
        &self.config
    }
}
