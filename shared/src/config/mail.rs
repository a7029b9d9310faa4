//! SMTP mail transport configuration

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// SMTP transport configuration for verification mail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// SMTP account username
    pub username: String,

    /// SMTP account password
    pub password: String,

    /// Sender address placed in the From header
    pub from: String,
}

impl MailConfig {
    /// Create from environment variables. All fields are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = require_var("SMTP_PORT")?;
        let port = port.parse().map_err(|_| ConfigError::InvalidVar {
            var: "SMTP_PORT".to_string(),
            reason: format!("not a valid port number: {}", port),
        })?;

        Ok(Self {
            host: require_var("SMTP_HOST")?,
            port,
            username: require_var("SMTP_USERNAME")?,
            password: require_var("SMTP_PASSWORD")?,
            from: require_var("SMTP_FROM")?,
        })
    }
}
