use thiserror::Error;

/// Authorization errors. Messages are shown to the end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Autenticação necessária. Faça login novamente.")]
    AuthenticationRequired,

    #[error("{0}")]
    PermissionDenied(String),

    #[error("Acesso restrito a coordenadores.")]
    CoordinatorRequired,

    #[error("Sessão inválida ou expirada.")]
    InvalidToken,
}
