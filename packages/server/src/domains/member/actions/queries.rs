//! Member query actions
//!
//! Coordinators see the whole registry. Agents only ever see their own row.

use tracing::info;

use crate::common::{Actor, Capability, MemberId};
use crate::domains::member::errors::MemberError;
use crate::domains::member::filter::{distinct_sectors, MemberFilter};
use crate::domains::member::models::{Member, Sector};
use crate::kernel::ServerDeps;

/// Members visible to the actor, ordered by name, then filtered.
pub async fn list_members(
    actor: Actor,
    filter: &MemberFilter,
    deps: &ServerDeps,
) -> Result<Vec<Member>, MemberError> {
    let members = visible_members(actor, deps).await?;
    let filtered = filter.apply(members);

    info!(
        member_id = %actor.member_id(),
        count = filtered.len(),
        "listed members"
    );
    Ok(filtered)
}

/// Unfiltered list visible to the actor
pub async fn visible_members(actor: Actor, deps: &ServerDeps) -> Result<Vec<Member>, MemberError> {
    if actor.can(Capability::ListMembers).check().is_ok() {
        return Ok(deps.members.list_by_name().await?);
    }

    let own = deps.members.find_by_id(actor.member_id()).await?;
    Ok(own.into_iter().collect())
}

pub async fn get_member(
    actor: Actor,
    id: MemberId,
    deps: &ServerDeps,
) -> Result<Member, MemberError> {
    actor.can(Capability::ViewMember(id)).check()?;

    deps.members
        .find_by_id(id)
        .await?
        .ok_or(MemberError::NotFound)
}

/// Sectors present among the members the actor can see
pub async fn member_sectors(actor: Actor, deps: &ServerDeps) -> Result<Vec<Sector>, MemberError> {
    let members = visible_members(actor, deps).await?;
    Ok(distinct_sectors(&members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_fields;
    use crate::domains::member::models::Role;
    use crate::kernel::test_dependencies::{InMemoryMemberStore, TestDependencies};

    fn deps() -> ServerDeps {
        let mut coordinator = sample_fields("COORD", "Zélia Coordenadora");
        coordinator.role = Role::Coordenador;
        coordinator.sector = Sector::CoordenadorParoquial;

        TestDependencies::new()
            .mock_members(
                InMemoryMemberStore::new()
                    .with_member(sample_fields("BRUNO", "Bruno Lima"))
                    .with_member(sample_fields("ANA", "Ana Souza"))
                    .with_member(coordinator),
            )
            .into_server_deps()
    }

    async fn member_id(deps: &ServerDeps, login: &str) -> MemberId {
        deps.members.find_by_login(login).await.unwrap()[0].id
    }

    #[tokio::test]
    async fn test_coordinator_lists_everyone_by_name() {
        let deps = deps();
        let actor = Actor::new(member_id(&deps, "COORD").await, true);

        let members = list_members(actor, &MemberFilter::default(), &deps)
            .await
            .unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "Zélia Coordenadora"]);
    }

    #[tokio::test]
    async fn test_agent_lists_only_self() {
        let deps = deps();
        let actor = Actor::new(member_id(&deps, "ANA").await, false);

        let members = list_members(actor, &MemberFilter::default(), &deps)
            .await
            .unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].login, "ANA");
    }

    #[tokio::test]
    async fn test_agent_cannot_view_another_member() {
        let deps = deps();
        let actor = Actor::new(member_id(&deps, "ANA").await, false);
        let other = member_id(&deps, "BRUNO").await;

        assert!(matches!(
            get_member(actor, other, &deps).await,
            Err(MemberError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_member() {
        let deps = deps();
        let actor = Actor::new(MemberId::new(), true);
        assert!(matches!(
            get_member(actor, MemberId::new(), &deps).await,
            Err(MemberError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_sectors_are_distinct() {
        let deps = deps();
        let actor = Actor::new(member_id(&deps, "COORD").await, true);

        let sectors = member_sectors(actor, &deps).await.unwrap();
        assert_eq!(
            sectors,
            vec![Sector::CoordenadorParoquial, Sector::PreMatrimonial]
        );
    }
}
