//! Public self-registration.

use tracing::info;

use crate::domains::auth::actions::{login, LoginOutcome};
use crate::domains::member::data::MemberInput;
use crate::domains::member::errors::{MemberError, RegisterError};
use crate::domains::member::models::Role;
use crate::kernel::ServerDeps;

/// Create an agent record for a newcomer and sign them in.
///
/// The role is always Agente no matter what the form carried. Sign-in
/// reuses the submitted login and birth date.
pub async fn register_member(
    input: MemberInput,
    deps: &ServerDeps,
) -> Result<LoginOutcome, RegisterError> {
    let birth_date = input.birth_date.clone();
    let mut fields = input.into_fields()?;
    fields.role = Role::Agente;

    let created = deps
        .members
        .insert(&fields)
        .await
        .map_err(MemberError::from)?;
    info!(member_id = %created.id, "member registered");

    Ok(login(&created.login, &birth_date, deps).await?)
}
