//! DTOs for the verification and password reset endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use sn_core::services::verification::Purpose;

/// Request body for POST /auth/send-code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Email address or phone number
    #[validate(length(min = 3, max = 254, message = "contact must be 3-254 characters"))]
    pub contact: String,

    /// What the code is for
    pub purpose: Purpose,
}

/// Response body for a successful code issuance
#[derive(Debug, Clone, Serialize)]
pub struct SendCodeResponse {
    /// Confirmation message for the user
    pub message: String,

    /// Seconds until a new code may be requested
    pub resend_after: i64,
}

/// Request body for POST /auth/verify-code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 3, max = 254, message = "contact must be 3-254 characters"))]
    pub contact: String,

    /// The submitted 6-digit code
    #[validate(length(equal = 6, message = "code must be exactly 6 digits"))]
    pub code: String,
}

/// Response body for POST /auth/verify-code.
///
/// Always returned with status 200; `valid` carries the outcome.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeResponse {
    pub valid: bool,
    pub message: String,
}

/// Query parameters for GET /auth/code-status
#[derive(Debug, Clone, Deserialize)]
pub struct CodeStatusQuery {
    pub contact: String,
}

/// Response body for GET /auth/code-status
#[derive(Debug, Clone, Serialize)]
pub struct CodeStatusResponse {
    /// Whether a live code is waiting for this contact
    pub pending: bool,
}

/// Request body for POST /auth/reset-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 3, max = 254, message = "contact must be 3-254 characters"))]
    pub contact: String,

    /// The new password to make effective
    #[validate(length(max = 128, message = "password too long"))]
    pub password: String,
}

/// Response body for a concluded password reset
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordResponse {
    /// A credential-changing strategy succeeded
    pub success: bool,

    /// Only the metadata marker landed
    pub partial_success: bool,

    /// Names of the strategies that succeeded
    pub methods: Vec<String>,

    /// Summary message for the user
    pub message: String,

    /// Follow-up instructions for the user
    pub instructions: Vec<String>,
}
