//! Business services
//!
//! - `verification` - one-time code issuance and verification
//! - `reset` - multi-strategy password reset orchestration
//! - `ads` - advertisement directory with built-in fallback

pub mod ads;
pub mod reset;
pub mod verification;

pub use ads::AdService;
pub use reset::{PasswordResetService, ResetConfig, ResetReport};
pub use verification::{Purpose, VerificationService, VerificationServiceConfig, VerifyOutcome};
