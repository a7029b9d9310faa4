//! Hosted auth service admin API configuration

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// Configuration for the auth backend's administrative REST API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthBackendConfig {
    /// Base URL of the auth service
    pub base_url: String,

    /// Service-role credential used for admin calls
    pub service_key: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AuthBackendConfig {
    /// Create from environment variables. URL and service key are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require_var("AUTH_BACKEND_URL")?
                .trim_end_matches('/')
                .to_string(),
            service_key: require_var("AUTH_SERVICE_KEY")?,
            timeout_secs: std::env::var("AUTH_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}
