// HTTP routes
pub mod diagnostics;
pub mod exports;
pub mod graphql;
pub mod health;

pub use diagnostics::*;
pub use exports::*;
pub use graphql::*;
pub use health::*;
