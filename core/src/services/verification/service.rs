//! Main verification service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing;

use crate::domain::entities::verification_code::{VerificationCode, CODE_LENGTH};
use crate::domain::value_objects::Contact;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::VerificationCodeRepository;

use super::config::VerificationServiceConfig;
use super::traits::{MailTransport, SmsTransport};
use super::types::{Purpose, SendCodeResult, VerifyOutcome};

/// Verification service handling code issuance and verification
pub struct VerificationService<R, M, S>
where
    R: VerificationCodeRepository,
    M: MailTransport,
    S: SmsTransport,
{
    /// Store for issued codes
    repository: Arc<R>,
    /// Mail transport for email contacts
    mail: Arc<M>,
    /// SMS transport for phone contacts
    sms: Arc<S>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<R, M, S> VerificationService<R, M, S>
where
    R: VerificationCodeRepository,
    M: MailTransport,
    S: SmsTransport,
{
    /// Create a new verification service
    pub fn new(
        repository: Arc<R>,
        mail: Arc<M>,
        sms: Arc<S>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            repository,
            mail,
            sms,
            config,
        }
    }

    /// Issue a verification code and dispatch it to the contact.
    ///
    /// This method:
    /// 1. Validates the contact format
    /// 2. Enforces the per-contact issuance cooldown
    /// 3. Generates a random 6-digit code and upserts it with expiry
    /// 4. Dispatches exactly one message through the matching transport
    ///
    /// A transport failure surfaces as [`DomainError::DeliveryFailed`]; the
    /// stored row is not rolled back, so the code remains verifiable.
    ///
    /// # Arguments
    ///
    /// * `contact` - Email address or phone number
    /// * `purpose` - What the code is for; selects the message template
    pub async fn send_code(
        &self,
        contact: &str,
        purpose: Purpose,
    ) -> DomainResult<SendCodeResult> {
        let contact = Contact::parse(contact)?;

        // Cooldown is derived from the stored row, not a separate counter
        if let Some(existing) = self.repository.find_by_contact(contact.as_str()).await? {
            let elapsed = Utc::now()
                .signed_duration_since(existing.created_at)
                .num_seconds();
            let remaining = self.config.resend_cooldown_seconds - elapsed;
            if remaining > 0 {
                tracing::warn!(
                    contact = %contact.masked(),
                    retry_after_secs = remaining,
                    event = "code_rate_limited",
                    "Verification code requested again within cooldown"
                );
                return Err(DomainError::RateLimited {
                    retry_after_secs: remaining,
                });
            }
        }

        let code = VerificationCode::new_with_expiration(
            contact.as_str().to_string(),
            self.config.code_expiration_minutes,
        );

        // Overwrites any previous row for this contact
        self.repository.upsert(code.clone()).await?;

        tracing::info!(
            contact = %contact.masked(),
            purpose = %purpose,
            event = "code_issued",
            "Issued verification code"
        );

        let dispatch = match &contact {
            Contact::Email(address) => {
                self.mail
                    .send_verification_code(address, &code.code, purpose)
                    .await
            }
            Contact::Phone(number) => {
                self.sms
                    .send_verification_code(number, &code.code, purpose)
                    .await
            }
        };

        let message_id = dispatch.map_err(|reason| {
            // The row stays in place: the code is valid even though this
            // delivery attempt failed
            tracing::error!(
                contact = %contact.masked(),
                error = %reason,
                event = "code_delivery_failed",
                "Failed to dispatch verification code"
            );
            DomainError::DeliveryFailed { reason }
        })?;

        Ok(SendCodeResult {
            message_id,
            expires_at: code.expires_at,
            next_resend_at: code.created_at
                + Duration::seconds(self.config.resend_cooldown_seconds),
        })
    }

    /// Verify a submitted (contact, code) pair.
    ///
    /// The lookup matches both fields exactly:
    /// - no match: [`VerifyOutcome::NotFound`], nothing deleted
    /// - match but expired: row deleted, [`VerifyOutcome::Expired`]
    /// - match and live: row deleted, [`VerifyOutcome::Valid`]
    ///
    /// Any terminating lookup is single-use; a mismatched code matches no
    /// row, so nothing is consumed by it.
    pub async fn verify_code(&self, contact: &str, code: &str) -> DomainResult<VerifyOutcome> {
        let contact = Contact::parse(contact)?;

        // A malformed code can never match a stored row
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                contact = %contact.masked(),
                event = "code_format_rejected",
                "Verification code with invalid format submitted"
            );
            return Ok(VerifyOutcome::NotFound);
        }

        let row = self
            .repository
            .find_by_contact_and_code(contact.as_str(), code)
            .await?;

        let row = match row {
            Some(row) => row,
            None => {
                tracing::warn!(
                    contact = %contact.masked(),
                    event = "code_not_found",
                    "Verification attempt matched no stored code"
                );
                return Ok(VerifyOutcome::NotFound);
            }
        };

        if row.is_expired() {
            self.repository.delete(contact.as_str()).await?;
            tracing::info!(
                contact = %contact.masked(),
                event = "code_expired",
                "Expired verification code consumed"
            );
            return Ok(VerifyOutcome::Expired);
        }

        self.repository.delete(contact.as_str()).await?;
        tracing::info!(
            contact = %contact.masked(),
            event = "code_verified",
            "Verification code consumed successfully"
        );
        Ok(VerifyOutcome::Valid)
    }

    /// Check whether a live code is pending for the contact.
    ///
    /// Used by the delivery status endpoint the client polls.
    pub async fn code_pending(&self, contact: &str) -> DomainResult<bool> {
        let contact = Contact::parse(contact)?;
        let row = self.repository.find_by_contact(contact.as_str()).await?;
        Ok(row.map(|code| !code.is_expired()).unwrap_or(false))
    }
}
