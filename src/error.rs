use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for every handler-level operation.
///
/// The `IntoResponse` impl is the single place where failures are turned into
/// the JSON error envelope; internal detail stays in the server log.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed or expired session token on a protected endpoint.
    #[error("Unauthorized")]
    Unauthorized,

    /// Wrong admin password on login.
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Content not found")]
    NotFound,

    /// A required secret is absent from the environment. Kept separate from
    /// the auth failures so a misconfigured deployment surfaces as a 500.
    #[error("server configuration error: {0}")]
    Configuration(&'static str),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::InvalidPassword => (StatusCode::UNAUTHORIZED, "Invalid password".to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, "Content not found".to_string()),
            Self::Configuration(_) | Self::Storage(_) | Self::Internal(_) => {
                tracing::error!("request failed: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
