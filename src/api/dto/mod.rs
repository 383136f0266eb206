//! Request/response data transfer objects for the REST API.
//!
//! Request DTOs derive [`validator::Validate`]; handlers call `validate()`
//! before touching the services. Response DTOs convert from domain
//! entities via `From`.

pub mod auth;
pub mod dogs;
pub mod health;
pub mod owners;
