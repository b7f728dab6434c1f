//! JSON error responses for the API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use triage_core::TriageError;

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Request rejected before reaching the service
    BadRequest(String),
    Triage(TriageError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Triage(TriageError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Triage(TriageError::Remote { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Triage(TriageError::Transport(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        Self::Triage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::BadRequest(message) => message,
            Self::Triage(err) => err.to_string(),
        };

        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %error, "Triage backend failure");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Reject blank text fields with a 400.
pub fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::bad_request(format!("{} cannot be empty", field)))
    } else {
        Ok(())
    }
}
