//! Postgres connection pool factory

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

use sn_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}
