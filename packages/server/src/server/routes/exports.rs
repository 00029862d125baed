//! File downloads: CSV export, profile cards and the statistics report.

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::common::{Actor, AuthError};
use crate::domains::member::data::parse_member_id;
use crate::domains::member::errors::MemberError;
use crate::domains::member::filter::MemberFilterQuery;
use crate::domains::reports::{actions, ReportError, ReportFile};
use crate::kernel::ErrorContext;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Serve a generated file as a download
pub fn attachment(file_name: &str, content_type: &'static str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn auth_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::AuthenticationRequired | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::PermissionDenied(_) | AuthError::CoordinatorRequired => StatusCode::FORBIDDEN,
    }
}

fn report_status(err: &ReportError) -> StatusCode {
    match err {
        ReportError::NothingToExport => StatusCode::NOT_FOUND,
        ReportError::Auth(e) | ReportError::Member(MemberError::Auth(e)) => auth_status(e),
        ReportError::Member(MemberError::NotFound) => StatusCode::NOT_FOUND,
        ReportError::Member(MemberError::Invalid(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn into_response(state: &AppState, result: Result<ReportFile, ReportError>) -> Response {
    match result {
        Ok(file) => attachment(&file.file_name, file.content_type, file.bytes),
        Err(e) => {
            let status = report_status(&e);
            let message = e.to_string();
            tracing::warn!(status = %status, error = %message, "export failed");
            state.deps.error_log.record(ErrorContext::General, message.clone());
            error_response(status, message)
        }
    }
}

fn actor(auth: Option<Extension<AuthUser>>) -> Result<Actor, ReportError> {
    auth.map(|Extension(user)| Actor::from_auth_user(&user))
        .ok_or(ReportError::Auth(AuthError::AuthenticationRequired))
}

/// `GET /exports/members.csv`
pub async fn members_csv_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Query(query): Query<MemberFilterQuery>,
) -> Response {
    let result: Result<ReportFile, ReportError> = async {
        let actor = actor(auth)?;
        let filter = query
            .into_filter()
            .map_err(|e| MemberError::Invalid(e.to_string()))?;
        actions::export_csv(actor, &filter, &state.deps).await
    }
    .await;

    into_response(&state, result)
}

/// `GET /exports/members.pdf`
pub async fn member_cards_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Query(query): Query<MemberFilterQuery>,
) -> Response {
    let result: Result<ReportFile, ReportError> = async {
        let actor = actor(auth)?;
        let filter = query
            .into_filter()
            .map_err(|e| MemberError::Invalid(e.to_string()))?;
        actions::export_cards(actor, &filter, &state.deps).await
    }
    .await;

    into_response(&state, result)
}

/// `GET /exports/members/:id/card.pdf`
pub async fn member_card_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<String>,
) -> Response {
    let result: Result<ReportFile, ReportError> = async {
        let actor = actor(auth)?;
        let id = parse_member_id(&id)?;
        actions::member_card(actor, id, &state.deps).await
    }
    .await;

    into_response(&state, result)
}

/// `GET /exports/report.pdf`
pub async fn report_pdf_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> Response {
    let result: Result<ReportFile, ReportError> = async {
        let actor = actor(auth)?;
        actions::report_pdf(actor, &state.deps).await
    }
    .await;

    into_response(&state, result)
}
