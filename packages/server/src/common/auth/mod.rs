/// Authorization for the parish registry
///
/// Role checks go through a small fluent API:
///
/// ```rust,ignore
/// use crate::common::auth::{Actor, Capability};
///
/// Actor::from_auth_user(&user)
///     .can(Capability::DeleteMembers)
///     .check()?;
/// ```
///
/// Coordinators hold every capability. Agents only hold the capabilities
/// that target their own record.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::Capability;
pub use errors::AuthError;
