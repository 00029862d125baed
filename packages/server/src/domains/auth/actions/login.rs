//! Sign-in by login + birth date.
//!
//! Stage 1 looks the login up case-insensitively and checks the birth date.
//! Stage 2 starts from the birth date instead and compares trimmed logins,
//! which catches rows whose login was stored with stray whitespace.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::common::dates::parse_date_input;
use crate::domains::auth::errors::LoginError;
use crate::domains::member::models::Member;
use crate::kernel::ServerDeps;

/// A signed-in member and the session token issued for them
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub member: Member,
    pub welcome_message: String,
}

pub async fn login(
    login: &str,
    birth_date: &str,
    deps: &ServerDeps,
) -> Result<LoginOutcome, LoginError> {
    let login = login.trim();
    let birth_date = birth_date.trim();
    if login.is_empty() || birth_date.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let Some(birth_date) = parse_date_input(birth_date) else {
        info!(login = %login, "login attempt with unparseable birth date");
        return Err(LoginError::InvalidCredentials);
    };

    let member = match find_by_login(login, birth_date, deps).await {
        Some(member) => member,
        None => {
            debug!(login = %login, "direct login lookup failed, trying birth date fallback");
            find_by_birth_date(login, birth_date, deps)
                .await?
                .ok_or(LoginError::InvalidCredentials)?
        }
    };

    let token = deps
        .jwt_service
        .issue(&member)
        .map_err(LoginError::Token)?;

    info!(member_id = %member.id, coordinator = member.is_coordinator(), "member signed in");

    Ok(LoginOutcome {
        token,
        welcome_message: format!("Bem-vindo, {}!", member.first_name()),
        member,
    })
}

async fn find_by_login(login: &str, birth_date: NaiveDate, deps: &ServerDeps) -> Option<Member> {
    match deps.members.find_by_login(login).await {
        Ok(candidates) => candidates.into_iter().find(|m| m.birth_date == birth_date),
        Err(e) => {
            warn!(error = %e, "primary login lookup failed");
            None
        }
    }
}

async fn find_by_birth_date(
    login: &str,
    birth_date: NaiveDate,
    deps: &ServerDeps,
) -> Result<Option<Member>, LoginError> {
    let wanted = login.to_lowercase();
    let candidates = deps.members.find_by_birth_date(birth_date).await?;

    Ok(candidates
        .into_iter()
        .find(|m| m.login.trim().to_lowercase() == wanted))
}
