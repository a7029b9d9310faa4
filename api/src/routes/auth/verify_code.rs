//! Handler for POST /api/v1/auth/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport, VerifyOutcome};

use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::{validation_error_response, AppState};

/// Consume a submitted (contact, code) pair.
///
/// Verification outcomes are not errors: the endpoint answers 200 with
/// `valid` set either way, so the client can distinguish a wrong code from
/// a transport problem.
pub async fn verify_code<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verify_code(&request.contact, &request.code)
        .await
    {
        Ok(outcome) => {
            let message = match outcome {
                VerifyOutcome::Valid => "Verification successful",
                VerifyOutcome::Expired => "Verification code has expired",
                VerifyOutcome::NotFound => "Verification code is incorrect or no longer valid",
            };
            HttpResponse::Ok().json(VerifyCodeResponse {
                valid: outcome.is_valid(),
                message: message.to_string(),
            })
        }
        Err(error) => domain_error_response(&error, state.environment),
    }
}
