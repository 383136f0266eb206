//! Repository trait for sitter account data access.

use crate::domain::entities::{NewSitter, Sitter, SitterPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for sitter accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSitterRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SitterRepository: Send + Sync {
    /// Creates a new sitter account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn create(&self, new_sitter: NewSitter) -> Result<Sitter, AppError>;

    /// Finds a sitter by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_id(&self, sitter_id: i64) -> Result<Option<Sitter>, AppError>;

    /// Finds a sitter by email, used during login.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<Sitter>, AppError>;

    /// Partially updates a sitter. Only fields present in [`SitterPatch`]
    /// are modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no sitter matches `sitter_id`.
    /// Returns [`AppError::Validation`] if the new email is taken.
    async fn update(&self, sitter_id: i64, patch: SitterPatch) -> Result<Sitter, AppError>;

    /// Deletes a sitter together with its owners and their dogs.
    ///
    /// All deletions happen inside one transaction. Returns `Ok(true)` if
    /// the sitter existed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn delete(&self, sitter_id: i64) -> Result<bool, AppError>;
}
