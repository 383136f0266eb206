//! # Pawliday
//!
//! Backend for a dog-sitting service built with Axum and SQLite. Sitters
//! manage their customers (dog owners) and the owners' dogs through a
//! session-authenticated REST API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Sitter accounts with argon2-hashed passwords
//! - HMAC-signed session cookies with CSRF protection
//! - Owner and dog CRUD, strictly scoped per sitter
//! - German phone number normalization
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SESSION_SIGNING_SECRET="change-me"
//! export DATABASE_URL="sqlite:data/pawliday.db"  # Optional
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, DogService, OwnerService, SitterService};
    pub use crate::domain::entities::{Dog, NewDog, NewOwner, NewSitter, Owner, Sitter};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
