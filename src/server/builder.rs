//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{PortalError, Result};
use tracing::info;

/// Server builder for easier configuration
#[allow(dead_code)]
pub struct ServerBuilder {
    config: Option<Config>,
}

#[allow(dead_code)]
impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PortalError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting AI Workbench portal");

    // Auto-load configuration file
    let config_path = "config/portal.yaml";
    info!("📄 Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("✅ Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "⚠️  Configuration file loading failed, using default config: {}",
                e
            );
            info!("💡 Please ensure config/portal.yaml exists with correct settings");
            Config::default()
        }
    };

    // Environment variables take precedence over file values
    let config = config.merge(Config::from_env()?);

    // Create and start server
    let server = HttpServer::new(&config).await?;
    info!(
        "🌐 Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("📋 API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/auth/google - Google sign-in");
    info!("   POST   /api/chat - Chat assistant");
    info!("   GET    /api/chat/health - Completion backend health");
    info!("   GET    /api/user/profile - Current user profile");
    info!("   GET    /api/users - User directory");
    info!("   GET    /api/groups - Groups");
    info!("   GET    /api/resources - Resource library");
    info!("   GET    /api/admin/analytics - Admin analytics");

    server.start().await
}
