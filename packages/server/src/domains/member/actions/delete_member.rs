use tracing::info;

use crate::common::{Actor, Capability, MemberId};
use crate::domains::member::errors::MemberError;
use crate::kernel::ServerDeps;

pub const DELETED_MESSAGE: &str = "Agente excluído com sucesso!";

/// Remove a member. Coordinators only.
pub async fn delete_member(
    actor: Actor,
    id: MemberId,
    deps: &ServerDeps,
) -> Result<(), MemberError> {
    actor.can(Capability::DeleteMembers).check()?;

    if !deps.members.delete(id).await? {
        return Err(MemberError::NotFound);
    }

    info!(actor = %actor.member_id(), member_id = %id, "member deleted");
    Ok(())
}
