//! Domain error taxonomy for verification, password reset, and the ad
//! directory.
//!
//! Error messages here are user-facing; transport/store details are kept in
//! the variant payloads so the presentation layer can decide how much to
//! expose.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Contact address has an invalid format: {contact}")]
    InvalidFormat { contact: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Too many requests. Please retry in {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: i64 },

    #[error("Failed to deliver verification code: {reason}")]
    DeliveryFailed { reason: String },

    #[error("Password too weak: {reasons}")]
    WeakPassword { reasons: String },

    #[error("No account matches the supplied contact")]
    AccountNotFound,

    #[error("All password reset strategies failed")]
    TotalResetFailure { details: Vec<String> },

    #[error("Backing store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable error code for programmatic handling by clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::InvalidFormat { .. } => "INVALID_FORMAT",
            DomainError::MissingField { .. } => "MISSING_FIELD",
            DomainError::RateLimited { .. } => "RATE_LIMITED",
            DomainError::DeliveryFailed { .. } => "DELIVERY_FAILED",
            DomainError::WeakPassword { .. } => "WEAK_PASSWORD",
            DomainError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            DomainError::TotalResetFailure { .. } => "TOTAL_RESET_FAILURE",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
