//! Sitter entity — the authenticated account holding owners and dogs.

use chrono::{DateTime, Utc};

/// A registered dog sitter.
///
/// The `password_hash` field stores an argon2 PHC string and never leaves
/// the persistence/auth boundary.
#[derive(Debug, Clone)]
pub struct Sitter {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new sitter.
#[derive(Debug, Clone)]
pub struct NewSitter {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Partial update for an existing sitter.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct SitterPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sitter_creation() {
        let now = Utc::now();
        let sitter = Sitter {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created_at: now,
        };

        assert_eq!(sitter.id, 1);
        assert_eq!(sitter.email, "ada@example.com");
        assert_eq!(sitter.created_at, now);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let patch = SitterPatch::default();
        assert!(patch.first_name.is_none());
        assert!(patch.email.is_none());
        assert!(patch.password_hash.is_none());
    }
}
