//! Postgres implementation of the VerificationCodeRepository trait.
//!
//! One row per contact; issuance upserts so the newest code always wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use sn_core::domain::entities::verification_code::VerificationCode;
use sn_core::errors::DomainError;
use sn_core::repositories::VerificationCodeRepository;

/// Postgres-backed verification code store
pub struct PgVerificationCodeRepository {
    pool: PgPool,
}

impl PgVerificationCodeRepository {
    /// Create a new repository over a connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_code(row: &sqlx::postgres::PgRow) -> Result<VerificationCode, DomainError> {
        Ok(VerificationCode {
            contact: row
                .try_get("contact")
                .map_err(|e| store_error("contact", e))?,
            code: row.try_get("code").map_err(|e| store_error("code", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| store_error("created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| store_error("expires_at", e))?,
        })
    }
}

#[async_trait]
impl VerificationCodeRepository for PgVerificationCodeRepository {
    async fn upsert(&self, code: VerificationCode) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO verification_codes (contact, code, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (contact) DO UPDATE
            SET code = EXCLUDED.code,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at
        "#;

        sqlx::query(query)
            .bind(&code.contact)
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error(e))?;

        Ok(())
    }

    async fn find_by_contact(
        &self,
        contact: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT contact, code, created_at, expires_at
            FROM verification_codes
            WHERE contact = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(contact)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_contact_and_code(
        &self,
        contact: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT contact, code, created_at, expires_at
            FROM verification_codes
            WHERE contact = $1 AND code = $2
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(contact)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, contact: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM verification_codes WHERE contact = $1")
            .bind(contact)
            .execute(&self.pool)
            .await
            .map_err(|e| query_error(e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn query_error(error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: format!("database query failed: {}", error),
    }
}

fn store_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::StoreUnavailable {
        message: format!("failed to read column {}: {}", column, error),
    }
}
