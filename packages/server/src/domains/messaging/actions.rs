use thiserror::Error;
use tracing::info;

use crate::common::{Actor, AuthError, Capability, MemberId};
use crate::domains::member::actions::list_members;
use crate::domains::member::errors::MemberError;
use crate::domains::member::filter::MemberFilter;
use crate::domains::member::models::Member;
use crate::domains::messaging::whatsapp::{link_for, WhatsappLink, DEFAULT_TEMPLATE};
use crate::kernel::ServerDeps;

#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Nenhum agente selecionado para enviar mensagem.")]
    NoRecipients,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Member(#[from] MemberError),
}

/// Links for the selected members, plus the members left out for lack of a phone
#[derive(Debug, Clone)]
pub struct WhatsappBatch {
    pub links: Vec<WhatsappLink>,
    pub skipped: Vec<Member>,
}

impl WhatsappBatch {
    pub fn summary(&self) -> String {
        format!(
            "Processo concluído. {} links de conversa foram gerados.",
            self.links.len()
        )
    }
}

/// Build personalized `wa.me` links for every member matching the filter.
///
/// `selected` narrows the recipients to those ids; ids outside the filtered
/// list are ignored. A blank template falls back to the default greeting.
pub async fn whatsapp_links(
    actor: Actor,
    filter: &MemberFilter,
    selected: Option<&[MemberId]>,
    template: Option<&str>,
    deps: &ServerDeps,
) -> Result<WhatsappBatch, MessagingError> {
    actor.can(Capability::SendMessages).check()?;

    let template = template
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TEMPLATE);

    let mut members = list_members(actor, filter, deps).await?;
    if let Some(selected) = selected {
        members.retain(|m| selected.contains(&m.id));
    }
    if members.is_empty() {
        return Err(MessagingError::NoRecipients);
    }

    let mut links = Vec::with_capacity(members.len());
    let mut skipped = Vec::new();
    for member in members {
        match link_for(&member, template) {
            Some(link) => links.push(link),
            None => skipped.push(member),
        }
    }

    info!(
        links = links.len(),
        skipped = skipped.len(),
        "whatsapp links generated"
    );
    Ok(WhatsappBatch { links, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_fields;
    use crate::domains::member::models::Sector;
    use crate::kernel::test_dependencies::{InMemoryMemberStore, TestDependencies};

    fn deps() -> ServerDeps {
        let mut no_phone = sample_fields("SEMFONE", "Sem Telefone");
        no_phone.phone = String::new();

        TestDependencies::new()
            .mock_members(
                InMemoryMemberStore::new()
                    .with_member(sample_fields("ANA", "Ana Souza"))
                    .with_member(sample_fields("BRUNO", "Bruno Lima"))
                    .with_member(no_phone),
            )
            .into_server_deps()
    }

    #[tokio::test]
    async fn test_links_and_skipped() {
        let deps = deps();
        let batch = whatsapp_links(
            Actor::new(MemberId::new(), true),
            &MemberFilter::default(),
            None,
            Some("Oi {nome}"),
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(batch.links.len(), 2);
        assert_eq!(batch.links[0].message, "Oi Ana");
        assert_eq!(batch.skipped[0].login, "SEMFONE");
        assert_eq!(
            batch.summary(),
            "Processo concluído. 2 links de conversa foram gerados."
        );
    }

    #[tokio::test]
    async fn test_explicit_selection() {
        let deps = deps();
        let bruno = deps.members.find_by_login("BRUNO").await.unwrap()[0].id;

        let batch = whatsapp_links(
            Actor::new(MemberId::new(), true),
            &MemberFilter::default(),
            Some(&[bruno]),
            None,
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(batch.links.len(), 1);
        assert_eq!(batch.links[0].message, "Olá, Bruno! Paz e bem!\n\n");
        assert!(batch.skipped.is_empty());

        let err = whatsapp_links(
            Actor::new(MemberId::new(), true),
            &MemberFilter::default(),
            Some(&[MemberId::new()]),
            None,
            &deps,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, MessagingError::NoRecipients));
    }

    #[tokio::test]
    async fn test_blank_template_uses_default() {
        let deps = deps();
        let batch = whatsapp_links(
            Actor::new(MemberId::new(), true),
            &MemberFilter::default(),
            None,
            Some("  "),
            &deps,
        )
        .await
        .unwrap();
        assert_eq!(batch.links[0].message, "Olá, Ana! Paz e bem!\n\n");
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let deps = deps();
        let filter = MemberFilter {
            sector: Some(Sector::CasosEspeciais),
            ..Default::default()
        };
        let err = whatsapp_links(Actor::new(MemberId::new(), true), &filter, None, None, &deps)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Nenhum agente selecionado para enviar mensagem.");
    }

    #[tokio::test]
    async fn test_agents_cannot_send() {
        let deps = deps();
        let err = whatsapp_links(
            Actor::new(MemberId::new(), false),
            &MemberFilter::default(),
            None,
            None,
            &deps,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, MessagingError::Auth(AuthError::CoordinatorRequired)));
    }
}
