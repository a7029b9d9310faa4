//! Handler for POST /api/v1/auth/reset-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport};

use crate::dto::auth::{ResetPasswordRequest, ResetPasswordResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::{validation_error_response, AppState};

/// Run the password reset orchestrator for the contact.
///
/// The caller is expected to have verified a one-time code for this
/// contact immediately before; the orchestrator itself does not re-check
/// it.
///
/// # Responses
///
/// * `200` - at least one strategy succeeded (`success` vs `partial_success`)
/// * `400` - password rules violated
/// * `404` - no account matches the contact
/// * `500` - every strategy failed (details attached)
pub async fn reset_password<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset
        .reset_password(&request.contact, &request.password)
        .await
    {
        Ok(report) => {
            let message = if report.full_success {
                "Password updated successfully"
            } else {
                "Password update partially completed"
            };
            HttpResponse::Ok().json(ResetPasswordResponse {
                success: report.full_success,
                partial_success: report.partial_success,
                methods: report.methods,
                message: message.to_string(),
                instructions: report.instructions,
            })
        }
        Err(error) => domain_error_response(&error, state.environment),
    }
}
