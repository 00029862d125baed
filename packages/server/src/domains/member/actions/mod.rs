//! Member domain actions - business logic functions
//!
//! Actions take the calling `Actor` and `ServerDeps` and return domain
//! errors. GraphQL and HTTP edges translate those for the client.

mod delete_member;
mod queries;
mod register_member;
mod save_member;

pub use delete_member::{delete_member, DELETED_MESSAGE};
pub use queries::{get_member, list_members, member_sectors, visible_members};
pub use register_member::register_member;
pub use save_member::{save_member, SAVED_MESSAGE};
