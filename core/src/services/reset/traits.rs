//! Admin interface to the hosted auth backend.
//!
//! The backend owns accounts, sessions, and credentials; this system only
//! orchestrates calls against it and never hashes or stores a password
//! itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Contact;

/// An account as seen through the admin API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthAccount {
    /// Backend account id
    pub id: String,

    /// Email address on file, if any
    pub email: Option<String>,

    /// Phone number on file, if any
    pub phone: Option<String>,
}

/// Administrative operations exposed by the auth backend
#[async_trait]
pub trait AuthAdmin: Send + Sync {
    /// Resolve an account by contact address
    async fn find_account(&self, contact: &Contact) -> Result<Option<AuthAccount>, String>;

    /// Set the account password directly
    async fn set_password(&self, account_id: &str, new_password: &str) -> Result<(), String>;

    /// Invalidate the account's active sessions
    async fn invalidate_sessions(&self, account_id: &str) -> Result<(), String>;

    /// Invalidate every session of the account, across all devices
    async fn invalidate_all_sessions(&self, account_id: &str) -> Result<(), String>;

    /// Ask the backend to generate a recovery link for the account
    async fn request_recovery_link(&self, account: &AuthAccount) -> Result<(), String>;

    /// Trigger the backend's own email-based reset for an address
    async fn send_reset_email(&self, email: &str) -> Result<(), String>;

    /// Merge metadata keys into the account
    async fn update_metadata(
        &self,
        account_id: &str,
        metadata: serde_json::Value,
    ) -> Result<(), String>;
}
