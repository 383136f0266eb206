//! DTOs for dog endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Dog, DogPatch, NewDog};

/// Request body for `POST /api/owners/{id}/dogs`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDogRequest {
    #[validate(range(min = 1))]
    pub chip_id: i64,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub breed: String,

    /// Shoulder height in centimeters.
    #[validate(range(min = 1, max = 200))]
    pub height: i64,

    /// Weight in kilograms.
    #[validate(range(min = 1, max = 150))]
    pub weight: i64,

    /// Daily food amount in grams.
    #[validate(range(min = 1, max = 5000))]
    pub food_per_day: i64,

    #[validate(length(min = 1, max = 32))]
    pub gender: String,

    pub castrated: bool,

    #[validate(length(min = 1, max = 255))]
    pub character: String,

    pub sociable: bool,
    pub training: bool,

    #[validate(url(message = "Invalid image URL"))]
    pub img_url: Option<String>,
}

impl CreateDogRequest {
    /// Attaches the owner from the URL path to build the insert payload.
    pub fn into_new_dog(self, owner_id: i64) -> NewDog {
        NewDog {
            chip_id: self.chip_id,
            owner_id,
            name: self.name,
            birth_date: self.birth_date,
            breed: self.breed,
            height: self.height,
            weight: self.weight,
            food_per_day: self.food_per_day,
            gender: self.gender,
            castrated: self.castrated,
            character: self.character,
            sociable: self.sociable,
            training: self.training,
            img_url: self.img_url,
        }
    }
}

/// Request body for `PATCH /api/dogs/{id}`.
///
/// All fields are optional — only provided fields are changed.
///
/// # `img_url` semantics
///
/// - **Absent** (`img_url` not in JSON) → leave existing value unchanged
/// - **`null`** → clear the image URL
/// - **String** → set a new image URL
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDogRequest {
    #[validate(range(min = 1))]
    pub chip_id: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255))]
    pub breed: Option<String>,

    #[validate(range(min = 1, max = 200))]
    pub height: Option<i64>,

    #[validate(range(min = 1, max = 150))]
    pub weight: Option<i64>,

    #[validate(range(min = 1, max = 5000))]
    pub food_per_day: Option<i64>,

    #[validate(length(min = 1, max = 32))]
    pub gender: Option<String>,

    pub castrated: Option<bool>,

    #[validate(length(min = 1, max = 255))]
    pub character: Option<String>,

    pub sociable: Option<bool>,
    pub training: Option<bool>,

    /// Image URL. Absent = no change, null = clear, value = set.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub img_url: Option<Option<String>>,
}

impl From<UpdateDogRequest> for DogPatch {
    fn from(r: UpdateDogRequest) -> Self {
        DogPatch {
            chip_id: r.chip_id,
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

/// JSON representation of a dog.
#[derive(Debug, Serialize)]
pub struct DogResponse {
    pub id: i64,
    pub chip_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub breed: String,
    pub height: i64,
    pub weight: i64,
    pub food_per_day: i64,
    pub gender: String,
    pub castrated: bool,
    pub character: String,
    pub sociable: bool,
    pub training: bool,
    pub img_url: Option<String>,
}

impl From<Dog> for DogResponse {
    fn from(d: Dog) -> Self {
        Self {
            id: d.id,
            chip_id: d.chip_id,
            owner_id: d.owner_id,
            name: d.name,
            birth_date: d.birth_date,
            breed: d.breed,
            height: d.height,
            weight: d.weight,
            food_per_day: d.food_per_day,
            gender: d.gender,
            castrated: d.castrated,
            character: d.character,
            sociable: d.sociable,
            training: d.training,
            img_url: d.img_url,
        }
    }
}

/// Response body for `GET /api/owners/{id}/dogs`.
#[derive(Debug, Serialize)]
pub struct DogListResponse {
    pub dogs: Vec<DogResponse>,
}
