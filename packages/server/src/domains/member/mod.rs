//! Member domain - agent registry records
//!
//! GraphQL → edges → actions → `BaseMemberStore`

pub mod actions;
pub mod anniversary;
pub mod data;
pub mod edges;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod models;

// Re-export commonly used types
pub use data::MemberData;
pub use errors::{MemberError, RegisterError};
pub use filter::MemberFilter;
pub use models::{MaritalStatus, Member, MemberFields, Role, Sector};
