//! Common error types and handling for CubeAI

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed causes for a failed entity lookup.
///
/// Each code is bound to one message; `Error::EntityNotFound` renders
/// exactly that message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MemberNotFound,
    CurriculumNotFound,
    ProjectNotFound,
    ProjectHistoryNotFound,
}

impl ErrorCode {
    /// Code name as exposed in API error bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::CurriculumNotFound => "CURRICULUM_NOT_FOUND",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::ProjectHistoryNotFound => "PROJECT_HISTORY_NOT_FOUND",
        }
    }

    /// Human-readable message bound to this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::CurriculumNotFound => "Curriculum not found",
            ErrorCode::ProjectNotFound => "Project not found",
            ErrorCode::ProjectHistoryNotFound => "Project history not found",
        }
    }

    /// HTTP status for this code
    #[mutants::skip] // Every lookup code maps to 404
    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common error type for the CubeAI backend
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", .0.message())]
    EntityNotFound(ErrorCode),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::EntityNotFound(code) => code.status_code(),
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Unexpected(_)
            | Error::Database(_)
            | Error::Serialization(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::EntityNotFound(code) => code.as_str(),
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The lookup code, if this is a not-found error
    pub fn entity_not_found_code(&self) -> Option<ErrorCode> {
        match self {
            Error::EntityNotFound(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Error::EntityNotFound(code)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Log internal errors with full context
        if matches!(status, StatusCode::INTERNAL_SERVER_ERROR) {
            tracing::error!(error = %self, "Internal server error");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
