//! Dog management service.
//!
//! Creation and listing verify the owner's sitter scope first, so a dog
//! can never be attached to or read through another sitter's owner.

use std::sync::Arc;

use crate::domain::entities::{Dog, DogPatch, NewDog};
use crate::domain::repositories::{DogRepository, OwnerRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for managing dogs within a sitter's scope.
pub struct DogService<D: DogRepository, O: OwnerRepository> {
    dog_repository: Arc<D>,
    owner_repository: Arc<O>,
}

impl<D: DogRepository, O: OwnerRepository> DogService<D, O> {
    /// Creates a new dog service.
    pub fn new(dog_repository: Arc<D>, owner_repository: Arc<O>) -> Self {
        Self {
            dog_repository,
            owner_repository,
        }
    }

    /// Creates a dog under an owner of the requesting sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist or
    /// belongs to another sitter.
    /// Returns [`AppError::Validation`] on a duplicate chip id.
    pub async fn create_dog(&self, sitter_id: i64, new_dog: NewDog) -> Result<Dog, AppError> {
        self.require_owner(new_dog.owner_id, sitter_id).await?;
        self.dog_repository.create(new_dog).await
    }

    /// Lists the dogs of one owner, scoped to the sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner is missing or foreign.
    pub async fn list_owner_dogs(
        &self,
        owner_id: i64,
        sitter_id: i64,
    ) -> Result<Vec<Dog>, AppError> {
        self.require_owner(owner_id, sitter_id).await?;
        self.dog_repository.list_for_owner(owner_id).await
    }

    /// Retrieves one dog, scoped to the sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the dog does not exist or its
    /// owner belongs to another sitter.
    pub async fn get_dog(&self, dog_id: i64, sitter_id: i64) -> Result<Dog, AppError> {
        self.dog_repository
            .find_by_id(dog_id, sitter_id)
            .await?
            .ok_or_else(|| dog_not_found(dog_id))
    }

    /// Partially updates a dog, scoped to the sitter.
    pub async fn update_dog(
        &self,
        dog_id: i64,
        sitter_id: i64,
        patch: DogPatch,
    ) -> Result<Dog, AppError> {
        self.dog_repository.update(dog_id, sitter_id, patch).await
    }

    /// Deletes a dog, scoped to the sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the dog does not exist or its
    /// owner belongs to another sitter.
    pub async fn delete_dog(&self, dog_id: i64, sitter_id: i64) -> Result<(), AppError> {
        if !self.dog_repository.delete(dog_id, sitter_id).await? {
            return Err(dog_not_found(dog_id));
        }
        Ok(())
    }

    async fn require_owner(&self, owner_id: i64, sitter_id: i64) -> Result<(), AppError> {
        self.owner_repository
            .find_by_id(owner_id, sitter_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Owner not found", json!({ "owner_id": owner_id }))
            })?;
        Ok(())
    }
}

fn dog_not_found(dog_id: i64) -> AppError {
    AppError::not_found("Dog not found", json!({ "dog_id": dog_id }))
}
