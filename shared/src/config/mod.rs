//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth_backend` - Hosted auth service admin API configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - SMTP transport configuration
//! - `server` - HTTP server configuration
//! - `sms` - Cloud SMS provider configuration

pub mod auth_backend;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod sms;

use thiserror::Error;

// Re-export commonly used types
pub use auth_backend::AuthBackendConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use sms::SmsConfig;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {reason}")]
    InvalidVar { var: String, reason: String },
}

/// Read a required environment variable
pub(crate) fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// SMTP mail transport configuration
    pub mail: MailConfig,

    /// Cloud SMS provider configuration
    pub sms: SmsConfig,

    /// Auth backend admin API configuration
    pub auth_backend: AuthBackendConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Fails with a [`ConfigError`] when any required credential is absent,
    /// so a misconfigured deployment refuses to start instead of failing
    /// on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            mail: MailConfig::from_env()?,
            sms: SmsConfig::from_env()?,
            auth_backend: AuthBackendConfig::from_env()?,
        })
    }
}
