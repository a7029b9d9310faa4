//! Route handlers
//!
//! Handlers are generic over the repository/transport traits so tests can
//! run the full HTTP surface against in-memory implementations.

pub mod ads;
pub mod auth;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::HttpResponse;
use serde_json::json;
use validator::ValidationErrors;

use sn_shared::types::response::ApiResponse;

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::ads::AdService;
use sn_core::services::reset::{AuthAdmin, PasswordResetService};
use sn_core::services::verification::{MailTransport, SmsTransport, VerificationService};
use sn_shared::config::Environment;

/// Application state holding the injected services.
///
/// Constructed once in `main` (or a test) and shared across workers.
pub struct AppState<R, M, S, B, A>
where
    R: VerificationCodeRepository,
    M: MailTransport,
    S: SmsTransport,
    B: AuthAdmin,
    A: AdRepository,
{
    pub verification: Arc<VerificationService<R, M, S>>,
    pub reset: Arc<PasswordResetService<B>>,
    pub ads: Arc<AdService<A>>,
    pub environment: Environment,
}

/// Render validator failures as a 400 response with per-field messages
pub(crate) fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, violations) in errors.field_errors() {
        let messages = violations
            .iter()
            .map(|v| {
                v.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| v.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    let body: ApiResponse<()> = ApiResponse::error("VALIDATION_ERROR", "Invalid request data")
        .with_details(HashMap::from([(
            "fields".to_string(),
            json!(field_errors),
        )]));

    HttpResponse::BadRequest().json(body)
}
