//! Error types for Bookshelf server

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

/// Main application error type.
///
/// Each variant carries the message sent back to the client verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingParameter(_)
            | AppError::Unavailable(_)
            | AppError::MalformedInput(_)
            | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Replace the client message of a `NotFound`, leaving other errors untouched
    pub fn not_found_as(self, message: &str) -> Self {
        match self {
            AppError::NotFound(_) => AppError::NotFound(message.to_string()),
            other => other,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::MalformedInput("invalid request body".to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::MalformedInput("invalid query string".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg)
            | AppError::MissingParameter(msg)
            | AppError::Unavailable(msg)
            | AppError::MalformedInput(msg)
            | AppError::InvalidId(msg) => msg,
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unavailable("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidId("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MalformedInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_as_only_rewrites_not_found() {
        let err = AppError::NotFound("Book not found".into()).not_found_as("book not found");
        assert_eq!(err, AppError::NotFound("book not found".into()));

        let err = AppError::Unavailable("Book not available ".into()).not_found_as("ignored");
        assert_eq!(err, AppError::Unavailable("Book not available ".into()));
    }
}
