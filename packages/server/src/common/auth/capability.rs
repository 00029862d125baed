use crate::common::MemberId;

/// Capabilities in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read a single member record
    ViewMember(MemberId),

    /// Edit a member record (agents may only edit themselves)
    EditMember(MemberId),

    /// Create records on someone else's behalf
    CreateMembers,

    /// See the full member list
    ListMembers,

    DeleteMembers,

    /// CSV/PDF exports and statistics
    ExportReports,

    /// Bulk WhatsApp links
    SendMessages,

    /// Download the server error log
    ViewErrorLog,
}

impl Capability {
    /// The member this capability is scoped to, if any.
    pub fn target(&self) -> Option<MemberId> {
        match self {
            Capability::ViewMember(id) | Capability::EditMember(id) => Some(*id),
            _ => None,
        }
    }

    /// Message returned when an agent lacks this capability.
    pub fn denial_message(&self) -> Option<&'static str> {
        match self {
            Capability::EditMember(_) | Capability::CreateMembers => {
                Some("Você não tem permissão para editar outros agentes.")
            }
            Capability::DeleteMembers => Some("Você não tem permissão para excluir agentes."),
            Capability::ViewMember(_) => {
                Some("Você não tem permissão para visualizar outros agentes.")
            }
            _ => None,
        }
    }
}
