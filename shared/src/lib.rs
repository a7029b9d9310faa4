//! Shared utilities and common types for the SoftNav backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Utility functions (contact validation, masking, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthBackendConfig, ConfigError, DatabaseConfig, Environment, MailConfig,
    ServerConfig, SmsConfig,
};
pub use types::response::{ApiResponse, ErrorBody};
pub use utils::validation;
