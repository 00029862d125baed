//! Member domain edges
//!
//! GraphQL entry points. They resolve the caller, run the action and record
//! user-facing failures in the error log.

pub mod mutation;
pub mod query;

pub use mutation::*;
pub use query::*;
