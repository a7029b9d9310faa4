//! Domain error to HTTP response mapping.
//!
//! Every error payload uses the shared [`ApiResponse`] envelope:
//! `{"success": false, "error": {"code", "message", "details"?}, ...}`.
//! Debug context is attached only in development builds.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use std::collections::HashMap;

use sn_core::errors::DomainError;
use sn_shared::config::Environment;
use sn_shared::types::response::ApiResponse;

/// HTTP status for a domain error
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidFormat { .. }
        | DomainError::MissingField { .. }
        | DomainError::WeakPassword { .. } => StatusCode::BAD_REQUEST,
        DomainError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        DomainError::DeliveryFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::AccountNotFound | DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::TotalResetFailure { .. }
        | DomainError::StoreUnavailable { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a domain error as an HTTP response
pub fn domain_error_response(error: &DomainError, environment: Environment) -> HttpResponse {
    let mut details: HashMap<String, serde_json::Value> = HashMap::new();

    // Strategy-level diagnostics are part of the contract for reset failures
    if let DomainError::TotalResetFailure { details: strategies } = error {
        details.insert("strategies".to_string(), json!(strategies));
    }

    if environment.is_debug() {
        details.insert("debug".to_string(), json!(format!("{:?}", error)));
    }

    let mut body: ApiResponse<()> = ApiResponse::error(error.error_code(), error.to_string());
    if !details.is_empty() {
        body = body.with_details(details);
    }

    HttpResponse::build(status_for(error)).json(body)
}
