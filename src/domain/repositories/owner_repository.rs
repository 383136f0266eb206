//! Repository trait for owner data access.
//!
//! Every read and write is scoped by `sitter_id`: a row belonging to a
//! different sitter is indistinguishable from a missing row.

use crate::domain::entities::{NewOwner, Owner, OwnerPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for dog owners.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteOwnerRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Creates a new owner for the sitter carried in `new_owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email or phone number is
    /// already in use.
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn create(&self, new_owner: NewOwner) -> Result<Owner, AppError>;

    /// Finds an owner by id, scoped to `sitter_id`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the owner does not exist or belongs to another sitter.
    async fn find_by_id(&self, owner_id: i64, sitter_id: i64) -> Result<Option<Owner>, AppError>;

    /// Lists all owners of a sitter, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn list_for_sitter(&self, sitter_id: i64) -> Result<Vec<Owner>, AppError>;

    /// Partially updates an owner, scoped to `sitter_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no owner matches `owner_id` for
    /// this sitter.
    /// Returns [`AppError::Validation`] on duplicate email/phone.
    async fn update(
        &self,
        owner_id: i64,
        sitter_id: i64,
        patch: OwnerPatch,
    ) -> Result<Owner, AppError>;

    /// Deletes an owner and all of its dogs, scoped to `sitter_id`.
    ///
    /// Returns `Ok(true)` if the owner existed for this sitter,
    /// `Ok(false)` otherwise.
    async fn delete(&self, owner_id: i64, sitter_id: i64) -> Result<bool, AppError>;
}
