//! Error types for the message board.
//!
//! Every failure a request can hit is one [`Error`] variant. The variant
//! decides the HTTP status; the client only ever sees the `Display` text,
//! wrapped as `{"error": "..."}`. Database detail stays in the logs.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Result type for store and handler operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The store operation an error belongs to.
///
/// Used to phrase the generic failure message without exposing the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => f.write_str("list messages"),
            Operation::Create => f.write_str("create message"),
            Operation::Update => f.write_str("update message"),
            Operation::Delete => f.write_str("delete message"),
        }
    }
}

/// Message board errors
#[derive(Debug, Error)]
pub enum Error {
    /// Required field(s) absent from the request payload
    #[error("{0}")]
    Validation(&'static str),

    /// Request body could not be read as the expected JSON object
    #[error("Failed to {0}")]
    MalformedPayload(Operation),

    /// Referenced message does not exist
    #[error("Message not found")]
    NotFound,

    /// The underlying store rejected or failed the operation
    #[error("Failed to {op}")]
    Persistence {
        op: Operation,
        #[source]
        source: DbErr,
    },
}

impl Error {
    pub(crate) const MISSING_BODY_AND_USERNAME: &'static str =
        "Missing required fields: body and username";
    pub(crate) const MISSING_BODY: &'static str = "Missing required field: body";

    pub(crate) fn persistence(op: Operation) -> impl FnOnce(DbErr) -> Self {
        move |source| {
            tracing::error!(operation = %op, error = %source, "store operation failed");
            Error::Persistence { op, source }
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) | Error::MalformedPayload(_) | Error::Persistence { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_message_hides_database_detail() {
        let err = Error::Persistence {
            op: Operation::Create,
            source: DbErr::Custom("UNIQUE constraint failed: messages.id".into()),
        };

        assert_eq!(err.to_string(), "Failed to create message");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(!ErrorResponse::from(&err).error.contains("UNIQUE"));
    }

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(Error::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Validation(Error::MISSING_BODY).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::MalformedPayload(Operation::Update).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn list_failure_reads_naturally() {
        let err = Error::Persistence {
            op: Operation::List,
            source: DbErr::Custom("disk I/O error".into()),
        };
        assert_eq!(err.to_string(), "Failed to list messages");
    }
}
