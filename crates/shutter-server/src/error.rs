use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::provider::ProviderError;

#[derive(Debug)]
pub enum AppError {
    /// No target URL could be derived from the request
    MissingTarget,

    /// The `screenshotone` overrides blob did not parse
    InvalidOverrides(String),

    /// The resolved target is not a well-formed URL
    InvalidTarget(String),

    /// The resolved target is outside the allowed domain
    ForbiddenDomain { host: String },

    /// The provider answered with a non-success status
    Upstream { status: u16 },

    /// Internal error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::MissingTarget => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "No target URL could be derived from the request".to_string(),
            ),
            AppError::InvalidOverrides(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("Invalid overrides payload: {}", msg),
            ),
            AppError::InvalidTarget(url) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("Resolved target is not a valid URL: {}", url),
            ),
            AppError::ForbiddenDomain { host } => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                format!("Host '{}' is outside the allowed domain", host),
            ),
            AppError::Upstream { status } => (
                // Pass the upstream status through when it maps cleanly
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Upstream Error",
                format!("Screenshot service responded with status {}", status),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Upstream { status } => Self::Upstream { status },
            ProviderError::Transport(e) => Self::Internal(e.to_string()),
        }
    }
}
