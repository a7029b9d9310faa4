//! SoftNav API server entry point.
//!
//! Wires the concrete infrastructure (Postgres, SMTP, cloud SMS, auth
//! admin client) into the core services and serves the HTTP API. All
//! configuration comes from environment variables; missing credentials
//! abort startup.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sn_core::services::ads::AdService;
use sn_core::services::reset::{PasswordResetService, ResetConfig};
use sn_core::services::verification::{VerificationService, VerificationServiceConfig};
use sn_infra::auth::AuthAdminClient;
use sn_infra::database::{create_pool, PgAdRepository, PgVerificationCodeRepository};
use sn_infra::mail::SmtpMailer;
use sn_infra::sms::CloudSmsService;
use sn_shared::config::AppConfig;

use sn_api::routes::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting SoftNav API server");

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;

    let verification_repository = Arc::new(PgVerificationCodeRepository::new(pool.clone()));
    let ad_repository = Arc::new(PgAdRepository::new(pool));

    let mailer = Arc::new(SmtpMailer::new(&config.mail).context("failed to set up SMTP")?);
    let sms = Arc::new(
        CloudSmsService::new(config.sms.clone()).context("failed to set up SMS client")?,
    );
    let auth_admin = Arc::new(
        AuthAdminClient::new(config.auth_backend.clone())
            .context("failed to set up auth admin client")?,
    );

    let state = web::Data::new(AppState {
        verification: Arc::new(VerificationService::new(
            verification_repository,
            mailer,
            sms,
            VerificationServiceConfig::default(),
        )),
        reset: Arc::new(PasswordResetService::new(auth_admin, ResetConfig::default())),
        ads: Arc::new(AdService::new(ad_repository)),
        environment: config.environment,
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, environment = %config.environment, "Server binding");

    HttpServer::new(move || sn_api::create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
