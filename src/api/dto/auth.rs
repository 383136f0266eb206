//! DTOs for sitter registration, login and account management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Sitter;

/// Request body for `POST /api/sitters/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /api/sitters/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request body for `PATCH /api/sitters/me`.
///
/// All fields are optional — only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSitterRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// JSON representation of a sitter account. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct SitterResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Sitter> for SitterResponse {
    fn from(s: Sitter) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
            created_at: s.created_at,
        }
    }
}

/// Response body for register/login.
///
/// The session token itself travels in an `HttpOnly` cookie; only the CSRF
/// token is exposed to the client script.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub sitter: SitterResponse,
    pub csrf_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok_fields()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRequest {
            password: "short".to_string(),
            ..ok_fields()
        };
        assert!(short_password.validate().is_err());
    }

    fn ok_fields() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
        }
    }

    #[test]
    fn test_update_request_allows_empty_patch() {
        let patch = UpdateSitterRequest {
            first_name: None,
            last_name: None,
            email: None,
            password: None,
        };
        assert!(patch.validate().is_ok());
    }
}
