//! Verification code workflow
//!
//! This module provides the complete verification code workflow:
//! - Code generation with a per-contact issuance cooldown
//! - Dispatch through the mail or SMS transport matching the contact kind
//! - Single-use verification with expiry handling
//! - A pending-code probe for delivery status checks

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{MailTransport, SmsTransport};
pub use types::{Purpose, SendCodeResult, VerifyOutcome};
