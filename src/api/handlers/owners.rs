//! Handlers for owner management endpoints.
//!
//! Every operation is scoped to the authenticated sitter. An owner that
//! belongs to a different sitter is indistinguishable from a missing one.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::owners::{
    CreateOwnerRequest, OwnerListResponse, OwnerResponse, UpdateOwnerRequest,
};
use crate::api::middleware::auth::CurrentSitter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all owners of the authenticated sitter.
///
/// # Endpoint
///
/// `GET /api/owners`
pub async fn list_owners_handler(
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<Json<OwnerListResponse>, AppError> {
    let owners = state.owner_service.list_owners(current.sitter_id).await?;

    Ok(Json(OwnerListResponse {
        owners: owners.into_iter().map(OwnerResponse::from).collect(),
    }))
}

/// Creates a new owner for the authenticated sitter.
///
/// # Endpoint
///
/// `POST /api/owners`
///
/// # Behavior
///
/// The phone number is normalized to `+49...` form before storage, so
/// `0151 2345678` and `+49 151 2345678` end up identical.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, the phone number is not a
/// valid German number, or the email/phone is already registered.
pub async fn create_owner_handler(
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
    Json(payload): Json<CreateOwnerRequest>,
) -> Result<(StatusCode, Json<OwnerResponse>), AppError> {
    payload.validate()?;

    let owner = state
        .owner_service
        .create_owner(
            current.sitter_id,
            payload.first_name,
            payload.last_name,
            payload.email,
            &payload.phone_number,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(OwnerResponse::from(owner))))
}

/// Retrieves one owner of the authenticated sitter.
///
/// # Endpoint
///
/// `GET /api/owners/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the owner does not exist or belongs to a
/// different sitter.
pub async fn get_owner_handler(
    Path(owner_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<Json<OwnerResponse>, AppError> {
    let owner = state
        .owner_service
        .get_owner(owner_id, current.sitter_id)
        .await?;

    Ok(Json(OwnerResponse::from(owner)))
}

/// Partially updates one owner of the authenticated sitter.
///
/// # Endpoint
///
/// `PATCH /api/owners/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the owner does not exist for this sitter.
/// Returns 400 Bad Request if validation fails.
pub async fn update_owner_handler(
    Path(owner_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateOwnerRequest>,
) -> Result<Json<OwnerResponse>, AppError> {
    payload.validate()?;

    let owner = state
        .owner_service
        .update_owner(
            owner_id,
            current.sitter_id,
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.phone_number,
        )
        .await?;

    Ok(Json(OwnerResponse::from(owner)))
}

/// Deletes one owner of the authenticated sitter, with all their dogs.
///
/// # Endpoint
///
/// `DELETE /api/owners/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the owner does not exist for this sitter.
pub async fn delete_owner_handler(
    Path(owner_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .owner_service
        .delete_owner(owner_id, current.sitter_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
