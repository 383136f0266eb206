//! Dog entity with biometric and behavioral attributes.

use chrono::NaiveDate;

/// A dog record, identified by its unique `chip_id` and owned by exactly
/// one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub id: i64,
    pub chip_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub breed: String,
    /// Shoulder height in centimeters.
    pub height: i64,
    /// Weight in kilograms.
    pub weight: i64,
    /// Daily food amount in grams.
    pub food_per_day: i64,
    pub gender: String,
    pub castrated: bool,
    pub character: String,
    pub sociable: bool,
    pub training: bool,
    pub img_url: Option<String>,
}

/// Input data for creating a new dog.
#[derive(Debug, Clone)]
pub struct NewDog {
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

/// Partial update for an existing dog.
///
/// `None` fields are left unchanged.
/// `img_url: Some(None)` clears the image; `Some(Some(url))` sets it.
#[derive(Debug, Clone, Default)]
pub struct DogPatch {
    pub chip_id: Option<i64>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub breed: Option<String>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub food_per_day: Option<i64>,
    pub gender: Option<String>,
    pub castrated: Option<bool>,
    pub character: Option<String>,
    pub sociable: Option<bool>,
    pub training: Option<bool>,
    pub img_url: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dog() -> Dog {
        Dog {
            id: 1,
            chip_id: 276_093_400_123_456,
            owner_id: 2,
            name: "Rex".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2020, 5, 17).unwrap(),
            breed: "Labrador".to_string(),
            height: 56,
            weight: 30,
            food_per_day: 400,
            gender: "male".to_string(),
            castrated: true,
            character: "calm".to_string(),
            sociable: true,
            training: true,
            img_url: None,
        }
    }

    #[test]
    fn test_dog_creation() {
        let dog = sample_dog();
        assert_eq!(dog.name, "Rex");
        assert_eq!(dog.chip_id, 276_093_400_123_456);
        assert!(dog.img_url.is_none());
    }

    #[test]
    fn test_patch_img_url_semantics() {
        // Absent = unchanged, Some(None) = clear, Some(Some) = set.
        let unchanged = DogPatch::default();
        assert!(unchanged.img_url.is_none());

        let cleared = DogPatch {
            img_url: Some(None),
            ..Default::default()
        };
        assert_eq!(cleared.img_url, Some(None));

        let set = DogPatch {
            img_url: Some(Some("https://img.example.com/rex.jpg".to_string())),
            ..Default::default()
        };
        assert!(matches!(set.img_url, Some(Some(_))));
    }
}
