//! Application error type with HTTP response conversion.
//!
//! Every handler returns `Result<_, AppError>`. The [`ErrorKind`] decides the
//! status code and the client-facing message; the wrapped [`anyhow::Error`]
//! carries the detail for operator logs. Detail is only ever shown to the
//! client for validation, not-found and conflict errors, whose messages are
//! written by the application itself.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Category of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is missing or the body could not be parsed.
    Validation,
    /// Login failed. Unknown email and wrong password are indistinguishable.
    InvalidCredentials,
    /// Missing, malformed, expired or badly signed bearer token.
    Forbidden,
    NotFound,
    Conflict,
    /// Store or hashing failure.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation | ErrorKind::InvalidCredentials => StatusCode::BAD_REQUEST,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    /// The detail is kept for logs only; the response says "Forbidden".
    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Forbidden, err)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, anyhow::anyhow!(INVALID_CREDENTIALS))
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    /// The message placed in the response body.
    pub fn client_message(&self) -> String {
        match self.kind {
            ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Conflict => {
                self.error.to_string()
            }
            ErrorKind::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            ErrorKind::Forbidden => "Forbidden".to_string(),
            ErrorKind::Internal => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind {
            ErrorKind::Internal => tracing::error!(error = ?self.error, "Internal server error"),
            ErrorKind::Forbidden => tracing::debug!(error = %self.error, "Request rejected"),
            _ => {}
        }

        let body = Json(json!({
            "error": self.client_message()
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
