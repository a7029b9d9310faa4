//! Handler for GET /api/v1/auth/code-status

use actix_web::{web, HttpResponse};

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport};

use crate::dto::auth::{CodeStatusQuery, CodeStatusResponse};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// Report whether a live code is pending for the contact.
///
/// The browser client polls this after a fire-and-forget send-code request
/// to confirm that the code actually landed in the store.
pub async fn code_status<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    query: web::Query<CodeStatusQuery>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    match state.verification.code_pending(&query.contact).await {
        Ok(pending) => HttpResponse::Ok().json(CodeStatusResponse { pending }),
        Err(error) => domain_error_response(&error, state.environment),
    }
}
