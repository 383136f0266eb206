//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`SitterRepository`] - Sitter accounts
//! - [`OwnerRepository`] - Dog owners, sitter-scoped
//! - [`DogRepository`] - Dogs, sitter-scoped through the owner join
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod dog_repository;
pub mod owner_repository;
pub mod sitter_repository;

pub use dog_repository::DogRepository;
pub use owner_repository::OwnerRepository;
pub use sitter_repository::SitterRepository;

#[cfg(test)]
pub use dog_repository::MockDogRepository;
#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use sitter_repository::MockSitterRepository;
