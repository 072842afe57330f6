//! # AI Workbench
//!
//! Backend service for the AI Workbench, an internal business portal with
//! role-based access control, a keyword-driven chat assistant, and team
//! management APIs.
//!
//! ## Features
//!
//! - **Role-Based Access**: Four-tier role hierarchy with explicit permission
//!   grants and a platform-owner override
//! - **Intent Classification**: Keyword-recall classifier routing chat messages
//!   to portal destinations, no model call required
//! - **Chat Assistant**: OpenAI-compatible completion backend with graceful
//!   degradation to scripted replies
//! - **Team Management**: Groups, memberships, and a country and
//!   stakeholder-aware resource library
//! - **Audit Trail**: Bounded in-memory log of administrative actions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workbench_rs::{Config, Portal};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/portal.yaml").await?;
//!     let portal = Portal::new(config).await?;
//!     portal.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PortalError, Result};

// Export the authorization model
pub use core::authz::{default_permissions_for, AccessPolicy};

// Export the intent classifier and router
pub use core::intent::{
    detect_intent, generate_routing_suggestions, Intent, IntentAnalysis, NavigationKey,
    NavigationOption,
};

// Export core functionality
pub use core::assistant::{AssistantReply, AssistantService, ChatTurn};
pub use core::models::{
    Group, GroupMembership, Permission, PermissionGrant, User, UserRole, UserStatus,
};

use tracing::info;

/// The portal service: configuration plus a ready-to-run HTTP server
pub struct Portal {
    config: Config,
    server: server::HttpServer,
}

impl Portal {
    /// Create a new portal instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new portal instance");

        // Create HTTP server
        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    /// Run the portal server
    pub async fn run(self) -> Result<()> {
        info!("Starting AI Workbench portal");
        info!("Listening on {}", self.config.server().address());

        // Start HTTP server
        self.server.start().await?;

        Ok(())
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
