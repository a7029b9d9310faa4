//! Verification service configuration

use crate::domain::entities::verification_code::{
    DEFAULT_EXPIRATION_MINUTES, RESEND_COOLDOWN_SECONDS,
};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// How long an issued code stays valid, in minutes
    pub code_expiration_minutes: i64,

    /// Minimum time between two issuances for the same contact, in seconds
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            resend_cooldown_seconds: RESEND_COOLDOWN_SECONDS,
        }
    }
}
