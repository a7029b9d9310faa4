//! Transport traits for verification code delivery

use async_trait::async_trait;

use super::types::Purpose;

/// Trait for the mail transport
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send a verification code by email.
    ///
    /// Returns the provider message id on success.
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String>;
}

/// Trait for the SMS transport
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Send a verification code by SMS.
    ///
    /// Returns the provider message id on success.
    async fn send_verification_code(
        &self,
        phone: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String>;
}
