//! Result and parameter types for the verification workflow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a verification code is being issued for.
///
/// The purpose selects the message template used by the transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    /// Account registration
    Registration,
    /// Password reset
    PasswordReset,
}

impl Purpose {
    /// Whether this purpose is a password reset
    pub fn is_reset(&self) -> bool {
        matches!(self, Purpose::PasswordReset)
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Purpose::Registration => write!(f, "registration"),
            Purpose::PasswordReset => write!(f, "password-reset"),
        }
    }
}

/// Result of a successful code issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResult {
    /// Provider message id of the dispatched email or SMS
    pub message_id: String,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,

    /// Earliest time a new code may be requested for this contact
    pub next_resend_at: DateTime<Utc>,
}

/// Terminal outcome of a verification attempt.
///
/// `Valid` and `Expired` both consume the stored row; `NotFound` touches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// The code matched and was still live
    Valid,
    /// The code matched but had expired
    Expired,
    /// No stored row matched the (contact, code) pair
    NotFound,
}

impl VerifyOutcome {
    /// Whether the attempt verified successfully
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}
