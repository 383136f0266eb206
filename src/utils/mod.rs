//! Small shared helpers.

pub mod password;
pub mod phone;
