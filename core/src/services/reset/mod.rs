//! Password reset orchestration
//!
//! The reset flow runs an ordered set of independent strategies against the
//! hosted auth backend and degrades gracefully: a strategy failure is
//! recorded, never fatal, and the combined outcome distinguishes full
//! success (credential changed) from partial success (only the metadata
//! marker landed).

mod config;
mod password_rules;
mod service;
mod strategies;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::ResetConfig;
pub use password_rules::validate_password_strength;
pub use service::PasswordResetService;
pub use strategies::{
    DirectStrategy, ForceStrategy, MetadataTouchStrategy, ResetContext, ResetStrategy,
    SessionResetStrategy,
};
pub use traits::{AuthAccount, AuthAdmin};
pub use types::{ResetReport, StrategyKind, StrategyRecord, StrategyResult};
