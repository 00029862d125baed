// Common types and utilities shared across the application

pub mod auth;
pub mod dates;
pub mod id;

pub use auth::{Actor, AuthError, Capability};
pub use id::MemberId;
