//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Email domain allowed to sign in (empty disables the restriction)
    #[serde(default = "default_email_domain")]
    pub allowed_email_domain: String,
    /// Platform owner email, granted every permission regardless of role
    pub owner_email: Option<String>,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            allowed_email_domain: default_email_domain(),
            owner_email: None,
            rbac: RbacConfig::default(),
        }
    }
}

#[allow(dead_code)]
impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.jwt_secret.is_empty() && other.jwt_secret != "your-secret-key" {
            self.jwt_secret = other.jwt_secret;
        }
        if other.jwt_expiration != default_jwt_expiration() {
            self.jwt_expiration = other.jwt_expiration;
        }
        if other.allowed_email_domain != default_email_domain() {
            self.allowed_email_domain = other.allowed_email_domain;
        }
        if other.owner_email.is_some() {
            self.owner_email = other.owner_email;
        }
        self.rbac = self.rbac.merge(other.rbac);
        self
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        // Validate JWT secret strength
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values. Please generate a secure random secret.".to_string());
        }

        // Check for common weak patterns
        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        // Validate JWT expiration
        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err(
                "JWT expiration should not exceed 30 days for security reasons".to_string(),
            );
        }

        // The domain is compared against the part after '@' in user emails
        if self.allowed_email_domain.contains('@') {
            return Err("Allowed email domain must not include an @ sign".to_string());
        }

        if let Some(owner_email) = &self.owner_email {
            if !owner_email.contains('@') {
                return Err(format!("Owner email is not a valid address: {}", owner_email));
            }
        }

        Ok(())
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role assigned to users on first sign-in
    #[serde(default = "default_role")]
    pub default_role: UserRole,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
        }
    }
}

#[allow(dead_code)]
impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        self
    }
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    // Generate a 64-character secure random string
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Warn about insecure configuration in development
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.owner_email.is_none() {
        warn!(
            "No owner email configured. The platform owner override is disabled and only role grants will apply."
        );
    }

    if config.allowed_email_domain.is_empty() {
        warn!(
            "Email domain restriction is disabled! Any Google account will be able to sign in."
        );
    }
}
