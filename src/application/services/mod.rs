//! Business logic services orchestrating the repositories.
//!
//! Services are generic over the repository traits so unit tests can
//! inject `mockall` mocks; the server wires them with the SQLite
//! implementations.
//!
//! - [`AuthService`] - registration, login, session tokens
//! - [`SitterService`] - sitter account CRUD
//! - [`OwnerService`] - owner CRUD, phone normalization
//! - [`DogService`] - dog CRUD, owner scope checks

pub mod auth_service;
pub mod dog_service;
pub mod owner_service;
pub mod sitter_service;

pub use auth_service::{AuthService, IssuedSession, Session};
pub use dog_service::DogService;
pub use owner_service::OwnerService;
pub use sitter_service::SitterService;
