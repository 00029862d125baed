use axum::{extract::Extension, http::StatusCode, response::Response};

use crate::common::{Actor, AuthError};
use crate::domains::diagnostics::actions::{error_log_text, ERROR_LOG_FILE_NAME};
use crate::domains::diagnostics::DiagnosticsError;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;
use crate::server::routes::exports::{attachment, auth_status, error_response};

/// `GET /diagnostics/error-log`
pub async fn error_log_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> Response {
    let Some(Extension(user)) = auth else {
        let err = AuthError::AuthenticationRequired;
        return error_response(auth_status(&err), err.to_string());
    };

    match error_log_text(Actor::from_auth_user(&user), &state.deps) {
        Ok(text) => attachment(
            ERROR_LOG_FILE_NAME,
            "text/plain; charset=utf-8",
            text.into_bytes(),
        ),
        Err(DiagnosticsError::EmptyErrorLog) => {
            error_response(StatusCode::NOT_FOUND, DiagnosticsError::EmptyErrorLog.to_string())
        }
        Err(DiagnosticsError::Auth(e)) => error_response(auth_status(&e), e.to_string()),
    }
}
