//! Repository trait for dog data access.
//!
//! Dogs are scoped through their owner: `sitter_id` filters go through a
//! join on the owners table, so another sitter's dog reads as missing.

use crate::domain::entities::{Dog, DogPatch, NewDog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for dogs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteDogRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Creates a new dog. The caller is responsible for checking that the
    /// owner belongs to the requesting sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the chip id is already
    /// registered.
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn create(&self, new_dog: NewDog) -> Result<Dog, AppError>;

    /// Finds a dog by id, scoped to `sitter_id` through the owner join.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the dog does not exist or its owner belongs to
    /// another sitter.
    async fn find_by_id(&self, dog_id: i64, sitter_id: i64) -> Result<Option<Dog>, AppError>;

    /// Lists all dogs of one owner, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Dog>, AppError>;

    /// Partially updates a dog, scoped to `sitter_id`.
    ///
    /// Only fields present in [`DogPatch`] are modified; `img_url`
    /// distinguishes clearing (`Some(None)`) from leaving unchanged (`None`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no dog matches `dog_id` for this
    /// sitter.
    /// Returns [`AppError::Validation`] on duplicate chip id.
    async fn update(&self, dog_id: i64, sitter_id: i64, patch: DogPatch) -> Result<Dog, AppError>;

    /// Deletes a dog, scoped to `sitter_id`.
    ///
    /// Returns `Ok(true)` if the dog existed for this sitter, `Ok(false)`
    /// otherwise.
    async fn delete(&self, dog_id: i64, sitter_id: i64) -> Result<bool, AppError>;
}
