// Pastoral Familiar - parish registry API
//
// Member records, login by birth date, coordinator reports and WhatsApp
// outreach links. Each domain is split into models, actions and GraphQL
// edges; `kernel` holds the dependency container and the store traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
