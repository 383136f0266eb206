//! Owner management service.

use std::sync::Arc;

use crate::domain::entities::{NewOwner, Owner, OwnerPatch};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;
use crate::utils::phone::normalize_de_phone;
use serde_json::json;

/// Service for managing a sitter's owner records.
///
/// Normalizes phone numbers to E.164 before they reach the store and maps
/// missing or foreign rows to not-found.
pub struct OwnerService<R: OwnerRepository> {
    repository: Arc<R>,
}

impl<R: OwnerRepository> OwnerService<R> {
    /// Creates a new owner service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all owners of a sitter.
    pub async fn list_owners(&self, sitter_id: i64) -> Result<Vec<Owner>, AppError> {
        self.repository.list_for_sitter(sitter_id).await
    }

    /// Creates a new owner for a sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid phone number or a
    /// duplicate email/phone.
    pub async fn create_owner(
        &self,
        sitter_id: i64,
        first_name: String,
        last_name: String,
        email: String,
        phone_number: &str,
    ) -> Result<Owner, AppError> {
        let phone_number = normalize_de_phone(phone_number)?;

        self.repository
            .create(NewOwner {
                sitter_id,
                first_name,
                last_name,
                email,
                phone_number,
            })
            .await
    }

    /// Retrieves one owner, scoped to the sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the owner does not exist or
    /// belongs to another sitter.
    pub async fn get_owner(&self, owner_id: i64, sitter_id: i64) -> Result<Owner, AppError> {
        self.repository
            .find_by_id(owner_id, sitter_id)
            .await?
            .ok_or_else(|| owner_not_found(owner_id))
    }

    /// Partially updates an owner, scoped to the sitter.
    ///
    /// A phone number, when present, is normalized first.
    pub async fn update_owner(
        &self,
        owner_id: i64,
        sitter_id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Owner, AppError> {
        let phone_number = match phone_number {
            Some(raw) => Some(normalize_de_phone(&raw)?),
            None => None,
        };

        self.repository
            .update(
                owner_id,
                sitter_id,
                OwnerPatch {
                    first_name,
                    last_name,
                    email,
                    phone_number,
                },
            )
            .await
    }

    /// Deletes an owner and its dogs, scoped to the sitter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the owner does not exist or
    /// belongs to another sitter.
    pub async fn delete_owner(&self, owner_id: i64, sitter_id: i64) -> Result<(), AppError> {
        if !self.repository.delete(owner_id, sitter_id).await? {
            return Err(owner_not_found(owner_id));
        }
        Ok(())
    }
}

fn owner_not_found(owner_id: i64) -> AppError {
    AppError::not_found("Owner not found", json!({ "owner_id": owner_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockOwnerRepository;

    fn test_owner(id: i64, sitter_id: i64) -> Owner {
        Owner {
            id,
            sitter_id,
            first_name: "Max".to_string(),
            last_name: "Mustermann".to_string(),
            email: "max@example.com".to_string(),
            phone_number: "+4915123456789".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_owner_normalizes_phone() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_create()
            .withf(|new| new.phone_number == "+4915123456789")
            .times(1)
            .returning(|new| {
                Ok(Owner {
                    id: 1,
                    sitter_id: new.sitter_id,
                    first_name: new.first_name,
                    last_name: new.last_name,
                    email: new.email,
                    phone_number: new.phone_number,
                })
            });

        let service = OwnerService::new(Arc::new(mock_repo));
        let result = service
            .create_owner(
                1,
                "Max".to_string(),
                "Mustermann".to_string(),
                "max@example.com".to_string(),
                "0151 23456789",
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_owner_invalid_phone() {
        let mock_repo = MockOwnerRepository::new();

        let service = OwnerService::new(Arc::new(mock_repo));
        let result = service
            .create_owner(
                1,
                "Max".to_string(),
                "Mustermann".to_string(),
                "max@example.com".to_string(),
                "+1 555 0100",
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_owner_scoped_miss_is_not_found() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = OwnerService::new(Arc::new(mock_repo));
        let result = service.get_owner(5, 2).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_owner_passes_patch_through() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo
            .expect_update()
            .withf(|owner_id, sitter_id, patch| {
                *owner_id == 5
                    && *sitter_id == 1
                    && patch.first_name.as_deref() == Some("Moritz")
                    && patch.phone_number.is_none()
            })
            .times(1)
            .returning(|owner_id, sitter_id, _| Ok(test_owner(owner_id, sitter_id)));

        let service = OwnerService::new(Arc::new(mock_repo));
        let result = service
            .update_owner(5, 1, Some("Moritz".to_string()), None, None, None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_owner_missing_is_not_found() {
        let mut mock_repo = MockOwnerRepository::new();
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(false));

        let service = OwnerService::new(Arc::new(mock_repo));
        let result = service.delete_owner(5, 1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
