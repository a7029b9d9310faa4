//! Repository interfaces for domain entity persistence.
//!
//! Each repository module ships the trait plus an in-memory mock used by
//! service tests and by the API integration tests.

pub mod ads;
pub mod verification;

pub use ads::{AdRepository, MockAdRepository};
pub use verification::{MockVerificationCodeRepository, VerificationCodeRepository};
