use super::{AuthError, Capability};
use crate::common::MemberId;
use crate::server::middleware::AuthUser;

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(member_id, is_coordinator)
///     .can(Capability::EditMember(target))
///     .check()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    member_id: MemberId,
    is_coordinator: bool,
}

impl Actor {
    /// `is_coordinator` comes from the member's stored role.
    pub fn new(member_id: MemberId, is_coordinator: bool) -> Self {
        Self {
            member_id,
            is_coordinator,
        }
    }

    pub fn from_auth_user(user: &AuthUser) -> Self {
        Self::new(user.member_id, user.is_coordinator)
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn is_coordinator(&self) -> bool {
        self.is_coordinator
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor: self,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor: Actor,
    capability: Capability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        if self.actor.is_coordinator {
            return Ok(());
        }

        if self.capability.target() == Some(self.actor.member_id) {
            return Ok(());
        }

        match self.capability.denial_message() {
            Some(message) => Err(AuthError::PermissionDenied(message.to_string())),
            None => Err(AuthError::CoordinatorRequired),
        }
    }
}
