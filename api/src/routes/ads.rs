//! Advertisement CRUD endpoints
//!
//! - `GET /ads` - list banners (fallback set on store trouble)
//! - `POST /ads` - create a banner
//! - `GET /ads/{id}` - fetch one banner
//! - `PUT /ads/{id}` - update a banner's destination link
//! - `DELETE /ads/{id}` - delete a banner

use actix_web::{web, HttpResponse};

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport};

use crate::dto::ads::{CreateAdRequest, DeleteAdResponse, UpdateAdRequest};
use crate::handlers::error::domain_error_response;
use crate::routes::AppState;

/// List all banners, newest first
pub async fn list_ads<R, M, S, B, A>(state: web::Data<AppState<R, M, S, B, A>>) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    HttpResponse::Ok().json(state.ads.list().await)
}

/// Create a banner; both image_url and link are required
pub async fn create_ad<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    request: web::Json<CreateAdRequest>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    let image_url = request.image_url.as_deref().unwrap_or_default();
    let link = request.link.as_deref().unwrap_or_default();

    match state.ads.create(image_url, link).await {
        Ok(ad) => HttpResponse::Created().json(ad),
        Err(error) => domain_error_response(&error, state.environment),
    }
}

/// Fetch one banner by id
pub async fn get_ad<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    match state.ads.get(&path.into_inner()).await {
        Ok(ad) => HttpResponse::Ok().json(ad),
        Err(error) => domain_error_response(&error, state.environment),
    }
}

/// Update the destination link of a banner
pub async fn update_ad<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    path: web::Path<String>,
    request: web::Json<UpdateAdRequest>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    let link = request.link.as_deref().unwrap_or_default();

    match state.ads.update_link(&path.into_inner(), link).await {
        Ok(ad) => HttpResponse::Ok().json(ad),
        Err(error) => domain_error_response(&error, state.environment),
    }
}

/// Delete a banner by id, unconditionally
pub async fn delete_ad<R, M, S, B, A>(
    state: web::Data<AppState<R, M, S, B, A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    match state.ads.delete(&path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(DeleteAdResponse {
            message: "Advertisement deleted".to_string(),
        }),
        Err(error) => domain_error_response(&error, state.environment),
    }
}
