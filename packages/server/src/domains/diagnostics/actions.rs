use std::time::Duration;

use chrono::Local;
use thiserror::Error;
use tracing::{info, warn};

use crate::common::{Actor, AuthError, Capability};
use crate::kernel::{ErrorContext, ServerDeps, StoreError};

pub const ERROR_LOG_FILE_NAME: &str = "pastoral_app_error_log.txt";

pub const APP_NAME: &str = "Pastoral Familiar - Cadastro Paroquial";
pub const APP_DESCRIPTION: &str =
    "Cadastro dos agentes da Pastoral Familiar: fichas cadastrais, relatórios e mensagens.";

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("Nenhum erro foi registrado na sessão atual.")]
    EmptyErrorLog,

    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Banco de dados indisponível: {0}")]
    Database(#[from] StoreError),

    #[error("Banco de dados não respondeu a tempo.")]
    Timeout,
}

/// Name, version and description shown on the "Sobre" page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

pub fn about() -> About {
    About {
        name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: APP_DESCRIPTION,
    }
}

/// The error log as a text file, if anything was recorded
pub fn error_log_text(actor: Actor, deps: &ServerDeps) -> Result<String, DiagnosticsError> {
    actor.can(Capability::ViewErrorLog).check()?;

    let text = deps
        .error_log
        .render(&deps.database_label, Local::now())
        .ok_or(DiagnosticsError::EmptyErrorLog)?;

    info!(entries = deps.error_log.entries().len(), "error log downloaded");
    Ok(text)
}

/// Database round trip bounded by a timeout.
///
/// Failures are recorded in the error log under `DB_CONNECTION`.
pub async fn check_database(deps: &ServerDeps) -> Result<(), HealthError> {
    let result = match tokio::time::timeout(HEALTH_TIMEOUT, deps.members.ping()).await {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(e)) => HealthError::Database(e),
        Err(_) => HealthError::Timeout,
    };

    warn!(error = %result, "Database health check failed");
    deps.error_log
        .record(ErrorContext::DbConnection, result.to_string());
    Err(result)
}
