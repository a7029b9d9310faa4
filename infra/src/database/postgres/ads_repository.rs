//! Postgres implementation of the AdRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use sn_core::domain::entities::advertisement::Advertisement;
use sn_core::errors::DomainError;
use sn_core::repositories::AdRepository;

/// Postgres-backed advertisement store
pub struct PgAdRepository {
    pool: PgPool,
}

impl PgAdRepository {
    /// Create a new repository over a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_ad(row: &sqlx::postgres::PgRow) -> Result<Advertisement, DomainError> {
        Ok(Advertisement {
            id: row.try_get("id").map_err(|e| column_error("id", e))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| column_error("image_url", e))?,
            link: row.try_get("link").map_err(|e| column_error("link", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn list_recent(&self) -> Result<Vec<Advertisement>, DomainError> {
        let query = r#"
            SELECT id, image_url, link, created_at
            FROM advertisements
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_ad).collect()
    }

    async fn create(&self, ad: Advertisement) -> Result<Advertisement, DomainError> {
        let query = r#"
            INSERT INTO advertisements (id, image_url, link, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, image_url, link, created_at
        "#;

        let row = sqlx::query(query)
            .bind(&ad.id)
            .bind(&ad.image_url)
            .bind(&ad.link)
            .bind(ad.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        Self::row_to_ad(&row)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Advertisement>, DomainError> {
        let query = r#"
            SELECT id, image_url, link, created_at
            FROM advertisements
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_ad(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_link(
        &self,
        id: &str,
        link: &str,
    ) -> Result<Option<Advertisement>, DomainError> {
        let query = r#"
            UPDATE advertisements
            SET link = $2
            WHERE id = $1
            RETURNING id, image_url, link, created_at
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(link)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_ad(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn query_error(error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: format!("database query failed: {}", error),
    }
}

fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: format!("failed to read column {}: {}", column, error),
    }
}
