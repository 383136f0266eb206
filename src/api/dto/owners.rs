//! DTOs for owner endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Owner;

/// Request body for `POST /api/owners`.
///
/// The phone number is accepted in any common German notation and stored
/// normalized; format validation happens in the service layer.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 3, max = 20))]
    pub phone_number: String,
}

/// Request body for `PATCH /api/owners/{id}`.
///
/// All fields are optional — only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOwnerRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 3, max = 20))]
    pub phone_number: Option<String>,
}

/// JSON representation of an owner.
#[derive(Debug, Serialize)]
pub struct OwnerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl From<Owner> for OwnerResponse {
    fn from(o: Owner) -> Self {
        Self {
            id: o.id,
            first_name: o.first_name,
            last_name: o.last_name,
            email: o.email,
            phone_number: o.phone_number,
        }
    }
}

/// Response body for `GET /api/owners`.
#[derive(Debug, Serialize)]
pub struct OwnerListResponse {
    pub owners: Vec<OwnerResponse>,
}
