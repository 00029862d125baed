use thiserror::Error;

use crate::common::AuthError;
use crate::domains::member::errors::MemberError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Não há agentes para exportar com os filtros selecionados.")]
    NothingToExport,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Member(#[from] MemberError),

    #[error("Erro ao gerar o CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Erro ao gerar o CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ocorreu um erro ao gerar o PDF: {0}")]
    Pdf(String),
}
