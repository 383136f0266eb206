//! Infrastructure layer: database access.
//!
//! Concrete implementations of the domain repository traits live here,
//! keeping `sqlx` out of the domain and application layers.

pub mod persistence;
