//! Sitter registration, login and session token handling.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewSitter, Sitter};
use crate::domain::repositories::SitterRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// A verified session extracted from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub sitter_id: i64,
    /// Unix timestamp after which the token is rejected.
    pub expires_at: i64,
    /// CSRF claim that mutating requests must echo in `X-CSRF-Token`.
    pub csrf_token: String,
}

/// A freshly issued session: the signed token plus its CSRF claim.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub csrf_token: String,
    pub expires_at: i64,
}

/// Service for sitter authentication via HMAC-signed session tokens.
///
/// Tokens are `base64url(payload).hex(hmac-sha256(payload))` where the
/// payload carries the sitter id, expiry and a random CSRF claim. An
/// attacker without the signing secret cannot forge or alter tokens.
pub struct AuthService<R: SitterRepository> {
    repository: Arc<R>,
    signing_secret: String,
    session_ttl_seconds: i64,
}

impl<R: SitterRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - sitter repository for account lookups
    /// - `signing_secret` - HMAC key; rotating it invalidates all sessions
    /// - `session_ttl_seconds` - lifetime of newly issued tokens
    pub fn new(repository: Arc<R>, signing_secret: String, session_ttl_seconds: i64) -> Self {
        Self {
            repository,
            signing_secret,
            session_ttl_seconds,
        }
    }

    /// Registers a new sitter account with an argon2-hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    pub async fn register(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: &str,
    ) -> Result<Sitter, AppError> {
        let password_hash = hash_password(password)?;

        self.repository
            .create(NewSitter {
                first_name,
                last_name,
                email,
                password_hash,
            })
            .await
    }

    /// Verifies credentials and returns the matching sitter.
    ///
    /// When the email is unknown, a dummy hash is still computed so the
    /// response time does not reveal whether the account exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<Sitter, AppError> {
        let sitter = match self.repository.find_by_email(email).await? {
            Some(sitter) => sitter,
            None => {
                let _ = hash_password(password);
                return Err(invalid_credentials());
            }
        };

        if !verify_password(password, &sitter.password_hash) {
            return Err(invalid_credentials());
        }

        Ok(sitter)
    }

    /// Issues a signed session token for a sitter.
    pub fn issue_session(&self, sitter_id: i64) -> IssuedSession {
        let expires_at = chrono::Utc::now().timestamp() + self.session_ttl_seconds;
        let csrf_token = generate_csrf_token();

        let payload = format!("{sitter_id}:{expires_at}:{csrf_token}");
        let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let signature = hex::encode(self.sign(&encoded));

        IssuedSession {
            token: format!("{encoded}.{signature}"),
            csrf_token,
            expires_at,
        }
    }

    /// Verifies a session token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, the
    /// signature does not verify, or the session has expired.
    pub fn verify_session(&self, token: &str) -> Result<Session, AppError> {
        let (encoded, signature_hex) = token.split_once('.').ok_or_else(invalid_session)?;

        let signature = hex::decode(signature_hex).map_err(|_| invalid_session())?;
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(encoded.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid_session())?;

        let payload_bytes = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| invalid_session())?;
        let payload = String::from_utf8(payload_bytes).map_err(|_| invalid_session())?;

        let mut parts = payload.splitn(3, ':');
        let (Some(id), Some(exp), Some(csrf)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid_session());
        };

        let sitter_id: i64 = id.parse().map_err(|_| invalid_session())?;
        let expires_at: i64 = exp.parse().map_err(|_| invalid_session())?;

        if chrono::Utc::now().timestamp() >= expires_at {
            return Err(AppError::unauthorized(
                "Session expired",
                json!({"reason": "Token expiry has passed"}),
            ));
        }

        Ok(Session {
            sitter_id,
            expires_at,
            csrf_token: csrf.to_string(),
        })
    }

    fn sign(&self, data: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(data.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(
        "Invalid email or password",
        json!({"reason": "Credentials did not match"}),
    )
}

fn invalid_session() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({"reason": "Session token is missing or invalid"}),
    )
}

/// Generates a random alphanumeric CSRF token.
fn generate_csrf_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 32;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSitterRepository;
    use chrono::Utc;

    fn service_with(repo: MockSitterRepository) -> AuthService<MockSitterRepository> {
        AuthService::new(Arc::new(repo), "test-signing-secret".to_string(), 3600)
    }

    fn stored_sitter(email: &str, password: &str) -> Sitter {
        Sitter {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut mock_repo = MockSitterRepository::new();
        mock_repo
            .expect_create()
            .withf(|new| {
                new.password_hash.starts_with("$argon2") && new.email == "ada@example.com"
            })
            .times(1)
            .returning(|new| {
                Ok(Sitter {
                    id: 1,
                    first_name: new.first_name,
                    last_name: new.last_name,
                    email: new.email,
                    password_hash: new.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = service_with(mock_repo);
        let sitter = service
            .register(
                "Ada".to_string(),
                "Lovelace".to_string(),
                "ada@example.com".to_string(),
                "correct horse",
            )
            .await
            .unwrap();

        assert_ne!(sitter.password_hash, "correct horse");
    }

    #[tokio::test]
    async fn test_login_success() {
        let sitter = stored_sitter("ada@example.com", "hunter22");
        let mut mock_repo = MockSitterRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(sitter.clone())));

        let service = service_with(mock_repo);
        let result = service.login("ada@example.com", "hunter22").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let sitter = stored_sitter("ada@example.com", "hunter22");
        let mut mock_repo = MockSitterRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(sitter.clone())));

        let service = service_with(mock_repo);
        let result = service.login("ada@example.com", "wrong").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut mock_repo = MockSitterRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(mock_repo);
        let result = service.login("ghost@example.com", "whatever").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let service = service_with(MockSitterRepository::new());

        let issued = service.issue_session(42);
        let session = service.verify_session(&issued.token).unwrap();

        assert_eq!(session.sitter_id, 42);
        assert_eq!(session.csrf_token, issued.csrf_token);
        assert_eq!(session.expires_at, issued.expires_at);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let service = service_with(MockSitterRepository::new());

        let issued = service.issue_session(42);
        let mut tampered = issued.token.clone();
        tampered.replace_range(0..1, "X");

        assert!(service.verify_session(&tampered).is_err());
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let issuer = AuthService::new(
            Arc::new(MockSitterRepository::new()),
            "secret-a".to_string(),
            3600,
        );
        let verifier = AuthService::new(
            Arc::new(MockSitterRepository::new()),
            "secret-b".to_string(),
            3600,
        );

        let issued = issuer.issue_session(1);
        assert!(verifier.verify_session(&issued.token).is_err());
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let service = AuthService::new(
            Arc::new(MockSitterRepository::new()),
            "test-signing-secret".to_string(),
            -10,
        );

        let issued = service.issue_session(1);
        let result = service.verify_session(&issued.token);

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let service = service_with(MockSitterRepository::new());
        assert!(service.verify_session("not-a-token").is_err());
        assert!(service.verify_session("a.b").is_err());
        assert!(service.verify_session("").is_err());
    }

    #[test]
    fn test_csrf_tokens_are_random() {
        assert_ne!(generate_csrf_token(), generate_csrf_token());
        assert_eq!(generate_csrf_token().len(), 32);
    }
}
