//! Verification code entity keyed by contact address.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Cooldown between two issuances for the same contact (60 seconds)
pub const RESEND_COOLDOWN_SECONDS: i64 = 60;

/// One-time verification code bound to an email address or phone number.
///
/// The store keeps at most one live row per contact; issuing a new code
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Contact address (email or phone) this code was sent to
    pub contact: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code with a random 6-digit code and the
    /// default expiration.
    pub fn new(contact: String) -> Self {
        Self::new_with_expiration(contact, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time.
    pub fn new_with_expiration(contact: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            contact,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
        }
    }

    /// Generates a uniformly random 6-digit decimal code.
    ///
    /// Leading zeros are preserved: "004217" is a valid code.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Seconds remaining before a new code may be issued for this contact,
    /// or zero when the cooldown has elapsed.
    pub fn cooldown_remaining_secs(&self) -> i64 {
        let elapsed = Utc::now().signed_duration_since(self.created_at).num_seconds();
        (RESEND_COOLDOWN_SECONDS - elapsed).max(0)
    }

    /// Whether the issuance cooldown is still in effect
    pub fn in_cooldown(&self) -> bool {
        self.cooldown_remaining_secs() > 0
    }
}
