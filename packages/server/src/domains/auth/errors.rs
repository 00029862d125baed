use thiserror::Error;

use crate::kernel::StoreError;

/// Sign-in failures. Display text is user-facing.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Login e data de nascimento são obrigatórios.")]
    MissingCredentials,

    #[error("Login ou data de nascimento incorretos. Verifique se o Login está digitado corretamente.")]
    InvalidCredentials,

    #[error("Erro ao acessar o banco de dados: {0}")]
    Store(#[from] StoreError),

    #[error("Não foi possível iniciar a sessão: {0}")]
    Token(#[source] jsonwebtoken::errors::Error),
}
