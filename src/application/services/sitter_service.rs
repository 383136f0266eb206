//! Sitter account management service.

use std::sync::Arc;

use crate::domain::entities::{Sitter, SitterPatch};
use crate::domain::repositories::SitterRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;
use serde_json::json;

/// Service for reading and maintaining sitter accounts.
pub struct SitterService<R: SitterRepository> {
    repository: Arc<R>,
}

impl<R: SitterRepository> SitterService<R> {
    /// Creates a new sitter service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves a sitter by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    pub async fn get_sitter(&self, sitter_id: i64) -> Result<Sitter, AppError> {
        self.repository
            .find_by_id(sitter_id)
            .await?
            .ok_or_else(|| sitter_not_found(sitter_id))
    }

    /// Partially updates a sitter account.
    ///
    /// A new password, when provided, is hashed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist and
    /// [`AppError::Validation`] when the new email is already taken.
    pub async fn update_sitter(
        &self,
        sitter_id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        password: Option<&str>,
    ) -> Result<Sitter, AppError> {
        let password_hash = match password {
            Some(raw) => Some(hash_password(raw)?),
            None => None,
        };

        self.repository
            .update(
                sitter_id,
                SitterPatch {
                    first_name,
                    last_name,
                    email,
                    password_hash,
                },
            )
            .await
    }

    /// Deletes a sitter together with its owners and dogs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    pub async fn delete_sitter(&self, sitter_id: i64) -> Result<(), AppError> {
        if !self.repository.delete(sitter_id).await? {
            return Err(sitter_not_found(sitter_id));
        }
        Ok(())
    }
}

fn sitter_not_found(sitter_id: i64) -> AppError {
    AppError::not_found("Sitter not found", json!({ "sitter_id": sitter_id }))
}
