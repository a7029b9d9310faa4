//! # SoftNav Infrastructure
//!
//! Concrete implementations of the core layer's repository and transport
//! traits: Postgres persistence, SMTP mail, the cloud SMS provider, and
//! the hosted auth service's admin API.

pub mod auth;
pub mod database;
pub mod mail;
pub mod sms;

use thiserror::Error;

/// Infrastructure-level errors raised while constructing clients
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mail transport error: {0}")]
    Mail(String),

    #[error("SMS transport error: {0}")]
    Sms(String),

    #[error("Auth backend error: {0}")]
    AuthBackend(String),
}
