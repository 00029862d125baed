//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod error_log;
pub mod test_dependencies;
pub mod traits;

pub use deps::{BrasilApiAdapter, PostgresMemberStore, ServerDeps};
pub use error_log::{ErrorContext, ErrorEntry, ErrorLog};
pub use test_dependencies::TestDependencies;
pub use traits::*;
