//! Verification code repository trait.
//!
//! The store keys codes by contact address with upsert semantics: a second
//! issuance for the same contact silently overwrites the first (accepted
//! last-writer-wins race).

use async_trait::async_trait;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for verification code persistence
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Insert or overwrite the code row for the contact.
    ///
    /// # Returns
    /// * `Ok(())` - row written
    /// * `Err(DomainError)` - store error
    async fn upsert(&self, code: VerificationCode) -> Result<(), DomainError>;

    /// Find the live row for a contact, if any
    async fn find_by_contact(
        &self,
        contact: &str,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Find the row matching both contact and code exactly
    async fn find_by_contact_and_code(
        &self,
        contact: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Delete the row for a contact.
    ///
    /// # Returns
    /// * `Ok(true)` - a row was deleted
    /// * `Ok(false)` - no row existed
    async fn delete(&self, contact: &str) -> Result<bool, DomainError>;
}
