//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Sitter`] - An authenticated dog sitter account
//! - [`Owner`] - A dog owner, scoped to one sitter
//! - [`Dog`] - A dog, scoped to one owner
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewSitter`, `NewOwner`, `NewDog`) and partial updates (`SitterPatch`,
//! `OwnerPatch`, `DogPatch`).

pub mod dog;
pub mod owner;
pub mod sitter;

pub use dog::{Dog, DogPatch, NewDog};
pub use owner::{NewOwner, Owner, OwnerPatch};
pub use sitter::{NewSitter, Sitter, SitterPatch};
