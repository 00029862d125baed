//! In-process log of errors that were surfaced to users.
//!
//! Support staff download it as a text file to diagnose problems reported by
//! agents. It lives only as long as the server process.

use chrono::{DateTime, Local, Utc};
use std::sync::{Arc, Mutex};

/// Oldest entries are dropped past this size.
const MAX_ENTRIES: usize = 1000;

/// Where an error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Login,
    Register,
    SaveAgent,
    DeleteAgent,
    FetchData,
    DbConnection,
    General,
}

impl ErrorContext {
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorContext::Login => "LOGIN",
            ErrorContext::Register => "REGISTER",
            ErrorContext::SaveAgent => "SAVE_AGENT",
            ErrorContext::DeleteAgent => "DELETE_AGENT",
            ErrorContext::FetchData => "FETCH_DATA",
            ErrorContext::DbConnection => "DB_CONNECTION",
            ErrorContext::General => "GERAL",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorEntry {
    pub at: DateTime<Utc>,
    pub context: ErrorContext,
    pub message: String,
}

impl ErrorEntry {
    /// `2024-05-01T12:00:00.000Z [LOGIN]: message`
    pub fn line(&self) -> String {
        format!(
            "{} [{}]: {}",
            self.at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            self.context.tag(),
            self.message
        )
    }
}

#[derive(Clone, Default)]
pub struct ErrorLog {
    entries: Arc<Mutex<Vec<ErrorEntry>>>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, context: ErrorContext, message: impl Into<String>) {
        let entry = ErrorEntry {
            at: Utc::now(),
            context,
            message: message.into(),
        };
        tracing::debug!(context = entry.context.tag(), message = %entry.message, "recorded user-facing error");

        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry);
        if entries.len() > MAX_ENTRIES {
            let overflow = entries.len() - MAX_ENTRIES;
            entries.drain(..overflow);
        }
    }

    pub fn entries(&self) -> Vec<ErrorEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Text report, or `None` when nothing was recorded.
    pub fn render(&self, database_label: &str, now: DateTime<Local>) -> Option<String> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }

        let mut lines = vec![
            "Log de Erros - Pastoral Familiar App".to_string(),
            "====================================".to_string(),
            format!("Data: {}", now.format("%d/%m/%Y %H:%M:%S")),
            format!("Banco de Dados Configurado: {}", database_label),
            "====================================".to_string(),
        ];
        lines.extend(entries.iter().map(ErrorEntry::line));
        Some(lines.join("\n"))
    }
}
