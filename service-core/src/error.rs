use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure kinds surfaced by the services in this workspace.
///
/// Client-input, upstream-call, and upstream-parse failures are distinct
/// variants so callers and tests can tell them apart; every non-client
/// variant maps to the same generic 500 response shape.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Upstream call failed: {0}")]
    UpstreamCall(anyhow::Error),

    #[error("Upstream response invalid: {0}")]
    UpstreamParse(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, error_message) = match self {
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::UpstreamCall(err)
            | AppError::UpstreamParse(err)
            | AppError::InternalError(err)
            | AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {}", err),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}
