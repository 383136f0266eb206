//! Handlers for dog management endpoints.
//!
//! Dogs are reached through their owner, so every operation checks that
//! the chain dog -> owner -> sitter ends at the authenticated sitter.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::dogs::{CreateDogRequest, DogListResponse, DogResponse, UpdateDogRequest};
use crate::api::middleware::auth::CurrentSitter;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a dog under one of the sitter's owners.
///
/// # Endpoint
///
/// `POST /api/owners/{id}/dogs`
///
/// # Errors
///
/// Returns 404 Not Found if the owner does not exist for this sitter.
/// Returns 400 Bad Request if validation fails or the chip id is taken.
pub async fn create_dog_handler(
    Path(owner_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
    Json(payload): Json<CreateDogRequest>,
) -> Result<(StatusCode, Json<DogResponse>), AppError> {
    payload.validate()?;

    let dog = state
        .dog_service
        .create_dog(current.sitter_id, payload.into_new_dog(owner_id))
        .await?;

    Ok((StatusCode::CREATED, Json(DogResponse::from(dog))))
}

/// Lists the dogs of one of the sitter's owners.
///
/// # Endpoint
///
/// `GET /api/owners/{id}/dogs`
///
/// # Errors
///
/// Returns 404 Not Found if the owner does not exist for this sitter.
pub async fn list_dogs_handler(
    Path(owner_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<Json<DogListResponse>, AppError> {
    let dogs = state
        .dog_service
        .list_owner_dogs(owner_id, current.sitter_id)
        .await?;

    Ok(Json(DogListResponse {
        dogs: dogs.into_iter().map(DogResponse::from).collect(),
    }))
}

/// Retrieves one dog reachable by the authenticated sitter.
///
/// # Endpoint
///
/// `GET /api/dogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the dog does not exist or its owner belongs
/// to a different sitter.
pub async fn get_dog_handler(
    Path(dog_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<Json<DogResponse>, AppError> {
    let dog = state.dog_service.get_dog(dog_id, current.sitter_id).await?;
    Ok(Json(DogResponse::from(dog)))
}

/// Partially updates one dog reachable by the authenticated sitter.
///
/// # Endpoint
///
/// `PATCH /api/dogs/{id}`
///
/// # Request Body
///
/// All fields are optional. `img_url` distinguishes absent (no change)
/// from `null` (clear the stored URL).
///
/// # Errors
///
/// Returns 404 Not Found if the dog does not exist for this sitter.
/// Returns 400 Bad Request if validation fails.
pub async fn update_dog_handler(
    Path(dog_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateDogRequest>,
) -> Result<Json<DogResponse>, AppError> {
    payload.validate()?;

    let dog = state
        .dog_service
        .update_dog(dog_id, current.sitter_id, payload.into())
        .await?;

    Ok(Json(DogResponse::from(dog)))
}

/// Deletes one dog reachable by the authenticated sitter.
///
/// # Endpoint
///
/// `DELETE /api/dogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the dog does not exist for this sitter.
pub async fn delete_dog_handler(
    Path(dog_id): Path<i64>,
    Extension(current): Extension<CurrentSitter>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .dog_service
        .delete_dog(dog_id, current.sitter_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
