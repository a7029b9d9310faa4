//! Handler for POST /api/v1/auth/send-code

use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport};

use crate::dto::auth::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::{validation_error_response, AppState};

/// Issue a verification code and dispatch it to the contact.
///
/// # Responses
///
/// * `200` - code stored and dispatched
/// * `400` - invalid contact format
/// * `429` - issuance cooldown still running
/// * `503` - transport failed (the stored code stays valid)
pub async fn send_code<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    if let Err(errors) = request.0.validate() {
        return validation_error_response(&errors);
    }

    match state
        .verification
        .send_code(&request.contact, request.purpose)
        .await
    {
        Ok(result) => {
            let resend_after = result
                .next_resend_at
                .signed_duration_since(Utc::now())
                .num_seconds()
                .max(0);
            HttpResponse::Ok().json(SendCodeResponse {
                message: "Verification code sent".to_string(),
                resend_after,
            })
        }
        Err(error) => domain_error_response(&error, state.environment),
    }
}
