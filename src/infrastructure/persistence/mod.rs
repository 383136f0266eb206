//! SQLite implementations of the domain repository traits.
//!
//! All repositories share one [`sqlx::SqlitePool`] and use runtime-bound
//! statements. Constraint violations are translated by
//! `From<sqlx::Error> for AppError`; multi-statement operations (partial
//! updates, cascading deletes) run inside a transaction.

pub mod sqlite_dog_repository;
pub mod sqlite_owner_repository;
pub mod sqlite_sitter_repository;

pub use sqlite_dog_repository::SqliteDogRepository;
pub use sqlite_owner_repository::SqliteOwnerRepository;
pub use sqlite_sitter_repository::SqliteSitterRepository;
