//! SQLite implementation of the dog repository.
//!
//! Sitter scoping goes through a join on the owners table: a dog whose
//! owner belongs to another sitter reads as missing.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Dog, DogPatch, NewDog};
use crate::domain::repositories::DogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct DogRow {
    dog_id: i64,
    chip_id: i64,
    owner_id: i64,
    name: String,
    birth_date: NaiveDate,
    breed: String,
    height: i64,
    weight: i64,
    food_per_day: i64,
    gender: String,
    castrated: bool,
    character: String,
    sociable: bool,
    training: bool,
    img_url: Option<String>,
}

impl From<DogRow> for Dog {
    fn from(r: DogRow) -> Self {
        Dog {
            id: r.dog_id,
            chip_id: r.chip_id,
            owner_id: r.owner_id,
            name: r.name,
            birth_date: r.birth_date,
            breed: r.breed,
            height: r.height,
            weight: r.weight,
            food_per_day: r.food_per_day,
            gender: r.gender,
            castrated: r.castrated,
            character: r.character,
            sociable: r.sociable,
            training: r.training,
            img_url: r.img_url,
        }
    }
}

const DOG_COLUMNS: &str = "d.dog_id, d.chip_id, d.owner_id, d.name, d.birth_date, d.breed, \
     d.height, d.weight, d.food_per_day, d.gender, d.castrated, d.character, \
     d.sociable, d.training, d.img_url";

/// SQLite repository for dogs.
pub struct SqliteDogRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for SqliteDogRepository {
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO dogs (chip_id, owner_id, name, birth_date, breed, height,
                              weight, food_per_day, gender, castrated, character,
                              sociable, training, img_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new_dog.chip_id)
        .bind(new_dog.owner_id)
        .bind(&new_dog.name)
        .bind(new_dog.birth_date)
        .bind(&new_dog.breed)
        .bind(new_dog.height)
        .bind(new_dog.weight)
        .bind(new_dog.food_per_day)
        .bind(&new_dog.gender)
        .bind(new_dog.castrated)
        .bind(&new_dog.character)
        .bind(new_dog.sociable)
        .bind(new_dog.training)
        .bind(&new_dog.img_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Dog {
            id: result.last_insert_rowid(),
            chip_id: new_dog.chip_id,
            owner_id: new_dog.owner_id,
            name: new_dog.name,
            birth_date: new_dog.birth_date,
            breed: new_dog.breed,
            height: new_dog.height,
            weight: new_dog.weight,
            food_per_day: new_dog.food_per_day,
            gender: new_dog.gender,
            castrated: new_dog.castrated,
            character: new_dog.character,
            sociable: new_dog.sociable,
            training: new_dog.training,
            img_url: new_dog.img_url,
        })
    }

    async fn find_by_id(&self, dog_id: i64, sitter_id: i64) -> Result<Option<Dog>, AppError> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            SELECT {DOG_COLUMNS}
            FROM dogs d
            JOIN owners o ON o.owner_id = d.owner_id
            WHERE d.dog_id = ? AND o.sitter_id = ?
            "#
        ))
        .bind(dog_id)
        .bind(sitter_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Dog::from))
    }

    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Dog>, AppError> {
        let rows = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            SELECT {DOG_COLUMNS}
            FROM dogs d
            WHERE d.owner_id = ?
            ORDER BY d.dog_id
            "#
        ))
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn update(&self, dog_id: i64, sitter_id: i64, patch: DogPatch) -> Result<Dog, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, DogRow>(&format!(
            r#"
            SELECT {DOG_COLUMNS}
            FROM dogs d
            JOIN owners o ON o.owner_id = d.owner_id
            WHERE d.dog_id = ? AND o.sitter_id = ?
            "#
        ))
        .bind(dog_id)
        .bind(sitter_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Dog not found", serde_json::json!({ "dog_id": dog_id }))
        })?;

        let mut dog = Dog::from(current);
        if let Some(v) = patch.chip_id {
            dog.chip_id = v;
        }
        if let Some(v) = patch.name {
            dog.name = v;
        }
        if let Some(v) = patch.birth_date {
            dog.birth_date = v;
        }
        if let Some(v) = patch.breed {
            dog.breed = v;
        }
        if let Some(v) = patch.height {
            dog.height = v;
        }
        if let Some(v) = patch.weight {
            dog.weight = v;
        }
        if let Some(v) = patch.food_per_day {
            dog.food_per_day = v;
        }
        if let Some(v) = patch.gender {
            dog.gender = v;
        }
        if let Some(v) = patch.castrated {
            dog.castrated = v;
        }
        if let Some(v) = patch.character {
            dog.character = v;
        }
        if let Some(v) = patch.sociable {
            dog.sociable = v;
        }
        if let Some(v) = patch.training {
            dog.training = v;
        }
        if let Some(v) = patch.img_url {
            dog.img_url = v;
        }

        sqlx::query(
            r#"
            UPDATE dogs
            SET chip_id = ?, name = ?, birth_date = ?, breed = ?, height = ?,
                weight = ?, food_per_day = ?, gender = ?, castrated = ?,
                character = ?, sociable = ?, training = ?, img_url = ?
            WHERE dog_id = ?
            "#,
        )
        .bind(dog.chip_id)
        .bind(&dog.name)
        .bind(dog.birth_date)
        .bind(&dog.breed)
        .bind(dog.height)
        .bind(dog.weight)
        .bind(dog.food_per_day)
        .bind(&dog.gender)
        .bind(dog.castrated)
        .bind(&dog.character)
        .bind(dog.sociable)
        .bind(dog.training)
        .bind(&dog.img_url)
        .bind(dog_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(dog)
    }

    async fn delete(&self, dog_id: i64, sitter_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM knowledges
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE d.dog_id = ? AND o.sitter_id = ?
            )
            "#,
        )
        .bind(dog_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM stays
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE d.dog_id = ? AND o.sitter_id = ?
            )
            "#,
        )
        .bind(dog_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query(
            r#"
            DELETE FROM dogs
            WHERE dog_id IN (
                SELECT d.dog_id FROM dogs d
                JOIN owners o ON o.owner_id = d.owner_id
                WHERE d.dog_id = ? AND o.sitter_id = ?
            )
            "#,
        )
        .bind(dog_id)
        .bind(sitter_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
