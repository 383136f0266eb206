//! SQLite implementation of the sitter repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewSitter, Sitter, SitterPatch};
use crate::domain::repositories::SitterRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct SitterRow {
    sitter_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<SitterRow> for Sitter {
    fn from(r: SitterRow) -> Self {
        Sitter {
            id: r.sitter_id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password_hash: r.password_hash,
            created_at: r.created_at,
        }
    }
}

/// SQLite repository for sitter accounts.
///
/// Uses runtime-bound statements; uniqueness of `email` is enforced by the
/// schema and surfaces as [`AppError::Validation`].
pub struct SqliteSitterRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSitterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SitterRepository for SqliteSitterRepository {
    async fn create(&self, new_sitter: NewSitter) -> Result<Sitter, AppError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO sitters (first_name, last_name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_sitter.first_name)
        .bind(&new_sitter.last_name)
        .bind(&new_sitter.email)
        .bind(&new_sitter.password_hash)
        .bind(now)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Sitter {
            id: result.last_insert_rowid(),
            first_name: new_sitter.first_name,
            last_name: new_sitter.last_name,
            email: new_sitter.email,
            password_hash: new_sitter.password_hash,
            created_at: now,
        })
    }

    async fn find_by_id(&self, sitter_id: i64) -> Result<Option<Sitter>, AppError> {
        let row = sqlx::query_as::<_, SitterRow>(
            r#"
            SELECT sitter_id, first_name, last_name, email, password_hash, created_at
            FROM sitters
            WHERE sitter_id = ?
            "#,
        )
        .bind(sitter_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Sitter::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Sitter>, AppError> {
        let row = sqlx::query_as::<_, SitterRow>(
            r#"
            SELECT sitter_id, first_name, last_name, email, password_hash, created_at
            FROM sitters
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Sitter::from))
    }

    async fn update(&self, sitter_id: i64, patch: SitterPatch) -> Result<Sitter, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, SitterRow>(
            r#"
            SELECT sitter_id, first_name, last_name, email, password_hash, created_at
            FROM sitters
            WHERE sitter_id = ?
            "#,
        )
        .bind(sitter_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Sitter not found", serde_json::json!({ "sitter_id": sitter_id }))
        })?;

        let mut sitter = Sitter::from(current);
        if let Some(v) = patch.first_name {
            sitter.first_name = v;
        }
        if let Some(v) = patch.last_name {
            sitter.last_name = v;
        }
        if let Some(v) = patch.email {
            sitter.email = v;
        }
        if let Some(v) = patch.password_hash {
            sitter.password_hash = v;
        }

        sqlx::query(
            r#"
            UPDATE sitters
            SET first_name = ?, last_name = ?, email = ?, password_hash = ?
            WHERE sitter_id = ?
            "#,
        )
        .bind(&sitter.first_name)
        .bind(&sitter.last_name)
        .bind(&sitter.email)
        .bind(&sitter.password_hash)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(sitter)
    }

    async fn delete(&self, sitter_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // Cascade by hand so the behavior does not depend on the
        // foreign_keys pragma of the connection.
        sqlx::query(
            r#"
            DELETE FROM knowledges
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE o.sitter_id = ?
            )
            "#,
        )
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM stays WHERE sitter_id = ?")
            .bind(sitter_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            DELETE FROM dogs
            WHERE owner_id IN (SELECT owner_id FROM owners WHERE sitter_id = ?)
            "#,
        )
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM owners WHERE sitter_id = ?")
            .bind(sitter_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM sitters WHERE sitter_id = ?")
            .bind(sitter_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
