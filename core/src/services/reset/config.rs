//! Password reset configuration

use std::time::Duration;

/// Configuration for the password reset orchestrator
#[derive(Debug, Clone)]
pub struct ResetConfig {
    /// Minimum accepted password length
    pub min_password_length: usize,

    /// Pause after a per-account session invalidation, giving the backend
    /// time to settle before the credential is written again
    pub settle_short: Duration,

    /// Longer pause used by the force strategy after a global sign-out
    pub settle_long: Duration,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            settle_short: Duration::from_secs(1),
            settle_long: Duration::from_secs(2),
        }
    }
}

impl ResetConfig {
    /// Configuration with zero settle pauses, for tests
    pub fn without_delays() -> Self {
        Self {
            settle_short: Duration::ZERO,
            settle_long: Duration::ZERO,
            ..Default::default()
        }
    }
}
