//! Cloud SMS provider configuration
//!
//! The provider exposes a template-based HTTP API: each message references
//! a pre-registered template id and a sign name, and the verification code
//! is passed as a template parameter.

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// Default endpoint of the SMS provider's send API
pub const DEFAULT_SMS_API_URL: &str = "https://dysmsapi.aliyuncs.com/";

/// Cloud SMS provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Send API endpoint
    pub api_url: String,

    /// Provider access key id
    pub access_key_id: String,

    /// Provider access key secret
    pub access_key_secret: String,

    /// Registered SMS signature name
    pub sign_name: String,

    /// Template id for registration codes
    pub template_register: String,

    /// Template id for password-reset codes
    pub template_reset: String,
}

impl SmsConfig {
    /// Create from environment variables. Credentials and template ids
    /// are required; the endpoint falls back to the provider default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: std::env::var("SMS_API_URL")
                .unwrap_or_else(|_| DEFAULT_SMS_API_URL.to_string()),
            access_key_id: require_var("SMS_ACCESS_KEY_ID")?,
            access_key_secret: require_var("SMS_ACCESS_KEY_SECRET")?,
            sign_name: require_var("SMS_SIGN_NAME")?,
            template_register: require_var("SMS_TEMPLATE_REGISTER")?,
            template_reset: require_var("SMS_TEMPLATE_RESET")?,
        })
    }

    /// Pick the template id for a given message purpose
    pub fn template_for(&self, purpose_is_reset: bool) -> &str {
        if purpose_is_reset {
            &self.template_reset
        } else {
            &self.template_register
        }
    }
}
