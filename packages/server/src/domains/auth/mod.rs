//! Auth domain - sign-in by login + birth date
//!
//! Responsibilities:
//! - Two-stage login matching against the member store
//! - Session/JWT token management

pub mod actions;
pub mod data;
pub mod edges;
pub mod errors;
pub mod jwt;

pub use errors::LoginError;
pub use jwt::{JwtService, SessionClaims};
