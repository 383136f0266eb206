//! SQLite implementation of the owner repository.
//!
//! Every query filters on `sitter_id`, so a row owned by another sitter is
//! indistinguishable from an absent row.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewOwner, Owner, OwnerPatch};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct OwnerRow {
    owner_id: i64,
    sitter_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
}

impl From<OwnerRow> for Owner {
    fn from(r: OwnerRow) -> Self {
        Owner {
            id: r.owner_id,
            sitter_id: r.sitter_id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone_number: r.phone_number,
        }
    }
}

/// SQLite repository for dog owners.
pub struct SqliteOwnerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for SqliteOwnerRepository {
    async fn create(&self, new_owner: NewOwner) -> Result<Owner, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO owners (sitter_id, first_name, last_name, email, phone_number)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(new_owner.sitter_id)
        .bind(&new_owner.first_name)
        .bind(&new_owner.last_name)
        .bind(&new_owner.email)
        .bind(&new_owner.phone_number)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Owner {
            id: result.last_insert_rowid(),
            sitter_id: new_owner.sitter_id,
            first_name: new_owner.first_name,
            last_name: new_owner.last_name,
            email: new_owner.email,
            phone_number: new_owner.phone_number,
        })
    }

    async fn find_by_id(&self, owner_id: i64, sitter_id: i64) -> Result<Option<Owner>, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT owner_id, sitter_id, first_name, last_name, email, phone_number
            FROM owners
            WHERE owner_id = ? AND sitter_id = ?
            "#,
        )
        .bind(owner_id)
        .bind(sitter_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Owner::from))
    }

    async fn list_for_sitter(&self, sitter_id: i64) -> Result<Vec<Owner>, AppError> {
        let rows = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT owner_id, sitter_id, first_name, last_name, email, phone_number
            FROM owners
            WHERE sitter_id = ?
            ORDER BY owner_id
            "#,
        )
        .bind(sitter_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Owner::from).collect())
    }

    async fn update(
        &self,
        owner_id: i64,
        sitter_id: i64,
        patch: OwnerPatch,
    ) -> Result<Owner, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT owner_id, sitter_id, first_name, last_name, email, phone_number
            FROM owners
            WHERE owner_id = ? AND sitter_id = ?
            "#,
        )
        .bind(owner_id)
        .bind(sitter_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Owner not found", serde_json::json!({ "owner_id": owner_id }))
        })?;

        let mut owner = Owner::from(current);
        if let Some(v) = patch.first_name {
            owner.first_name = v;
        }
        if let Some(v) = patch.last_name {
            owner.last_name = v;
        }
        if let Some(v) = patch.email {
            owner.email = v;
        }
        if let Some(v) = patch.phone_number {
            owner.phone_number = v;
        }

        sqlx::query(
            r#"
            UPDATE owners
            SET first_name = ?, last_name = ?, email = ?, phone_number = ?
            WHERE owner_id = ? AND sitter_id = ?
            "#,
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.email)
        .bind(&owner.phone_number)
        .bind(owner_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(owner)
    }

    async fn delete(&self, owner_id: i64, sitter_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        // Dependent rows are removed only when the owner really belongs to
        // this sitter; the subqueries repeat the scope check.
        sqlx::query(
            r#"
            DELETE FROM knowledges
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE o.owner_id = ? AND o.sitter_id = ?
            )
            "#,
        )
        .bind(owner_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM stays
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE o.owner_id = ? AND o.sitter_id = ?
            )
            "#,
        )
        .bind(owner_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM dogs
            WHERE owner_id IN (
                SELECT owner_id FROM owners WHERE owner_id = ? AND sitter_id = ?
            )
            "#,
        )
        .bind(owner_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM owners WHERE owner_id = ? AND sitter_id = ?")
            .bind(owner_id)
            .bind(sitter_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
