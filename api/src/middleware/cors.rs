//! CORS middleware configuration.
//!
//! The API is consumed by the directory site, the admin panel, and local
//! development servers, so the policy is deliberately permissive: any
//! origin, the standard methods, any header.

use actix_cors::Cors;
use actix_web::http::Method;

/// Creates the permissive CORS middleware used by every route
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_any_header()
        .max_age(3600)
}
