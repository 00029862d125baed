use thiserror::Error;

use crate::common::AuthError;
use crate::kernel::StoreError;

/// Errors from member operations. Display text is user-facing.
#[derive(Debug, Error)]
pub enum MemberError {
    #[error("O campo {0} é obrigatório.")]
    MissingField(&'static str),

    #[error("{0}")]
    Invalid(String),

    #[error("Agente não encontrado.")]
    NotFound,

    #[error("Este login já está em uso. Por favor, escolha outro.")]
    DuplicateLogin,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Erro ao acessar o banco de dados: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for MemberError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateLogin => MemberError::DuplicateLogin,
            other => MemberError::Store(other),
        }
    }
}

/// Save failures as shown to the user. Permission denials keep their own
/// wording; everything else is reported as a failed save.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Denied(AuthError),

    #[error("Falha ao salvar o agente: {0}")]
    Failed(MemberError),
}

impl From<MemberError> for SaveError {
    fn from(err: MemberError) -> Self {
        match err {
            MemberError::Auth(e) => SaveError::Denied(e),
            other => SaveError::Failed(other),
        }
    }
}

/// Self-registration failures
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Falha ao cadastrar: {0}")]
    Member(#[from] MemberError),

    /// The record was created but the automatic sign-in failed
    #[error(transparent)]
    Login(#[from] crate::domains::auth::LoginError),
}
