//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AuthService, DogService, OwnerService, SitterService};
use crate::infrastructure::persistence::{
    SqliteDogRepository, SqliteOwnerRepository, SqliteSitterRepository,
};

/// Application state: the wired services plus the pool for health probes.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<SqliteSitterRepository>>,
    pub sitter_service: Arc<SitterService<SqliteSitterRepository>>,
    pub owner_service: Arc<OwnerService<SqliteOwnerRepository>>,
    pub dog_service: Arc<DogService<SqliteDogRepository, SqliteOwnerRepository>>,
    pub db: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the services over one shared connection pool.
    pub fn new(pool: Arc<SqlitePool>, session_signing_secret: String, session_ttl_seconds: i64) -> Self {
        let sitter_repository = Arc::new(SqliteSitterRepository::new(pool.clone()));
        let owner_repository = Arc::new(SqliteOwnerRepository::new(pool.clone()));
        let dog_repository = Arc::new(SqliteDogRepository::new(pool.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(
                sitter_repository.clone(),
                session_signing_secret,
                session_ttl_seconds,
            )),
            sitter_service: Arc::new(SitterService::new(sitter_repository)),
            owner_service: Arc::new(OwnerService::new(owner_repository.clone())),
            dog_service: Arc::new(DogService::new(dog_repository, owner_repository)),
            db: pool,
        }
    }
}
