//! Argon2 password hashing helpers.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a password with argon2id and a random salt.
///
/// Returns a PHC string suitable for storage in `sitters.password_hash`.
///
/// # Errors
///
/// Returns [`AppError::Unavailable`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::unavailable("Password hashing failed", json!({}))
        })
}

/// Verifies a password against a stored PHC hash string.
///
/// Returns `false` for wrong passwords and for unparsable hashes.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
