//! Application factory
//!
//! Builds the actix-web application with all routes and middleware around
//! an injected [`AppState`]. Generic over the repository/transport traits
//! so tests can run the full HTTP surface against in-memory services.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use sn_core::repositories::{AdRepository, VerificationCodeRepository};
use sn_core::services::reset::AuthAdmin;
use sn_core::services::verification::{MailTransport, SmsTransport};

use crate::middleware::cors::create_cors;
use crate::routes::ads::{create_ad, delete_ad, get_ad, list_ads, update_ad};
use crate::routes::auth::{
    code_status::code_status, reset_password::reset_password, send_code::send_code,
    verify_code::verify_code,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<R, M, S, B, A>(
    app_state: web::Data<AppState<R, M, S, B, A>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: VerificationCodeRepository + 'static,
    M: MailTransport + 'static,
    S: SmsTransport + 'static,
    B: AuthAdmin + 'static,
    A: AdRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/send-code", web::post().to(send_code::<R, M, S, B, A>))
                        .route("/verify-code", web::post().to(verify_code::<R, M, S, B, A>))
                        .route("/code-status", web::get().to(code_status::<R, M, S, B, A>))
                        .route(
                            "/reset-password",
                            web::post().to(reset_password::<R, M, S, B, A>),
                        ),
                )
                .service(
                    web::scope("/ads")
                        .route("", web::get().to(list_ads::<R, M, S, B, A>))
                        .route("", web::post().to(create_ad::<R, M, S, B, A>))
                        .route("/{id}", web::get().to(get_ad::<R, M, S, B, A>))
                        .route("/{id}", web::put().to(update_ad::<R, M, S, B, A>))
                        .route("/{id}", web::delete().to(delete_ad::<R, M, S, B, A>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "softnav-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "SoftNav API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "send_code": {
                    "path": "/api/v1/auth/send-code",
                    "method": "POST",
                    "description": "Issue a verification code via email or SMS",
                    "request_body": {
                        "contact": "string (email or phone)",
                        "purpose": "string ('registration' or 'password-reset')"
                    },
                    "responses": {
                        "200": "Code sent successfully",
                        "400": "Invalid contact format",
                        "429": "Issuance cooldown still running",
                        "503": "Delivery transport unavailable"
                    }
                },
                "verify_code": {
                    "path": "/api/v1/auth/verify-code",
                    "method": "POST",
                    "description": "Verify a submitted code; single use",
                    "request_body": {
                        "contact": "string (email or phone)",
                        "code": "string (exactly 6 digits)"
                    },
                    "responses": {
                        "200": "Outcome in the 'valid' field"
                    }
                },
                "code_status": {
                    "path": "/api/v1/auth/code-status",
                    "method": "GET",
                    "description": "Whether a live code is pending for a contact"
                },
                "reset_password": {
                    "path": "/api/v1/auth/reset-password",
                    "method": "POST",
                    "description": "Reset the account password after code verification",
                    "request_body": {
                        "contact": "string (email or phone)",
                        "password": "string (min 6, upper, lower, digit)"
                    },
                    "responses": {
                        "200": "Full or partial success",
                        "400": "Weak password",
                        "404": "Account not found",
                        "500": "All strategies failed"
                    }
                }
            },
            "ads": {
                "list": { "path": "/api/v1/ads", "method": "GET" },
                "create": { "path": "/api/v1/ads", "method": "POST" },
                "get": { "path": "/api/v1/ads/{id}", "method": "GET" },
                "update": { "path": "/api/v1/ads/{id}", "method": "PUT" },
                "delete": { "path": "/api/v1/ads/{id}", "method": "DELETE" }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
