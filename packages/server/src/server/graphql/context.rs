use juniper::{FieldError, Value};
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

use crate::common::{Actor, AuthError};
use crate::kernel::{ErrorContext, ServerDeps};
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Shared dependencies plus the caller resolved by the JWT middleware.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: Arc<ServerDeps>, auth_user: Option<AuthUser>) -> Self {
        Self { deps, auth_user }
    }

    /// The signed-in caller, or an authentication error
    pub fn actor(&self) -> Result<Actor, AuthError> {
        self.auth_user
            .as_ref()
            .map(Actor::from_auth_user)
            .ok_or(AuthError::AuthenticationRequired)
    }

    /// Record a user-facing error and turn it into a GraphQL error
    pub fn fail(&self, context: ErrorContext, err: impl Display) -> FieldError {
        let message = err.to_string();
        warn!(context = context.tag(), error = %message, "request failed");
        self.deps.error_log.record(context, message.clone());
        FieldError::new(message, Value::null())
    }
}
