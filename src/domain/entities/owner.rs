//! Owner entity — a dog owner managed by exactly one sitter.

/// A dog owner record, scoped to the sitter who created it.
///
/// `phone_number` is stored in E.164 form (`+49…`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub sitter_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Input data for creating a new owner.
#[derive(Debug, Clone)]
pub struct NewOwner {
    pub sitter_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Partial update for an existing owner. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct OwnerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_creation() {
        let owner = Owner {
            id: 7,
            sitter_id: 1,
            first_name: "Max".to_string(),
            last_name: "Mustermann".to_string(),
            email: "max@example.com".to_string(),
            phone_number: "+4915123456789".to_string(),
        };

        assert_eq!(owner.id, 7);
        assert_eq!(owner.sitter_id, 1);
        assert!(owner.phone_number.starts_with("+49"));
    }
}
