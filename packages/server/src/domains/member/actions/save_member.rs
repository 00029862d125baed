use tracing::info;

use crate::common::{Actor, Capability, MemberId};
use crate::domains::member::data::MemberInput;
use crate::domains::member::errors::MemberError;
use crate::domains::member::models::{Member, Role};
use crate::kernel::ServerDeps;

pub const SAVED_MESSAGE: &str = "Agente salvo com sucesso!";

/// Create (no id) or update (id) a member record.
///
/// Agents may only update themselves and can never change their role. The
/// login is fixed at registration, so an update keeps the stored one.
pub async fn save_member(
    actor: Actor,
    id: Option<MemberId>,
    input: MemberInput,
    deps: &ServerDeps,
) -> Result<Member, MemberError> {
    match id {
        Some(id) => actor.can(Capability::EditMember(id)).check()?,
        None => actor.can(Capability::CreateMembers).check()?,
    }

    let mut fields = input.into_fields()?;
    if !actor.is_coordinator() {
        fields.role = Role::Agente;
    }

    let saved = match id {
        Some(id) => {
            let existing = deps
                .members
                .find_by_id(id)
                .await?
                .ok_or(MemberError::NotFound)?;
            fields.login = existing.login;

            deps.members
                .update(id, &fields)
                .await?
                .ok_or(MemberError::NotFound)?
        }
        None => deps.members.insert(&fields).await?,
    };

    info!(
        actor = %actor.member_id(),
        member_id = %saved.id,
        created = id.is_none(),
        "member saved"
    );
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_fields;
    use crate::domains::member::models::{MaritalStatus, Sector};
    use crate::kernel::test_dependencies::{InMemoryMemberStore, TestDependencies};

    fn input(login: &str, name: &str) -> MemberInput {
        MemberInput {
            login: login.to_string(),
            full_name: name.to_string(),
            birth_date: "1975-08-09".to_string(),
            marital_status: Some(MaritalStatus::Casado),
            phone: "73912345678".to_string(),
            email: "agente@paroquia.org".to_string(),
            sector: Some(Sector::CasosEspeciais),
            role: Some(Role::Coordenador),
            join_date: "2018-02-01".to_string(),
            ..Default::default()
        }
    }

    fn deps() -> ServerDeps {
        TestDependencies::new()
            .mock_members(
                InMemoryMemberStore::new()
                    .with_member(sample_fields("ANA", "Ana Souza"))
                    .with_member(sample_fields("BRUNO", "Bruno Lima")),
            )
            .into_server_deps()
    }

    async fn id_of(deps: &ServerDeps, login: &str) -> MemberId {
        deps.members.find_by_login(login).await.unwrap()[0].id
    }

    #[tokio::test]
    async fn test_coordinator_creates_member() {
        let deps = deps();
        let actor = Actor::new(MemberId::new(), true);

        let saved = save_member(actor, None, input(" carla ", "Carla Dias"), &deps)
            .await
            .unwrap();
        assert_eq!(saved.login, "CARLA");
        assert_eq!(saved.role, Role::Coordenador);
        assert_eq!(saved.phone, "(73) 91234-5678");
    }

    #[tokio::test]
    async fn test_agent_cannot_create_or_edit_others() {
        let deps = deps();
        let ana = id_of(&deps, "ANA").await;
        let bruno = id_of(&deps, "BRUNO").await;
        let actor = Actor::new(ana, false);

        let err = save_member(actor, Some(bruno), input("BRUNO", "Bruno"), &deps)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Você não tem permissão para editar outros agentes."
        );

        assert!(save_member(actor, None, input("NOVO", "Novo"), &deps)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_agent_edits_self_but_stays_agent() {
        let deps = deps();
        let ana = id_of(&deps, "ANA").await;

        let saved = save_member(
            Actor::new(ana, false),
            Some(ana),
            input("OUTRO", "Ana Souza Lima"),
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(saved.full_name, "Ana Souza Lima");
        assert_eq!(saved.role, Role::Agente);
        assert_eq!(saved.login, "ANA");
    }

    #[tokio::test]
    async fn test_duplicate_login_message() {
        let deps = deps();
        let err = save_member(Actor::new(MemberId::new(), true), None, input("ana", "Outra Ana"), &deps)
            .await
            .unwrap_err();

        assert!(matches!(err, MemberError::DuplicateLogin));
        assert_eq!(
            err.to_string(),
            "Este login já está em uso. Por favor, escolha outro."
        );
    }

    #[tokio::test]
    async fn test_update_unknown_member() {
        let deps = deps();
        let err = save_member(
            Actor::new(MemberId::new(), true),
            Some(MemberId::new()),
            input("X", "X"),
            &deps,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, MemberError::NotFound));
    }
}
