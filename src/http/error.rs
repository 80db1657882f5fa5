//! API error type carrying HTTP semantics.
//!
//! Domain and service failures are converted into [`ApiError`] at the
//! boundary; the error itself knows which status code it maps to, so
//! handlers simply propagate with `?`.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Offending request field.
    pub field: &'static str,
    /// Constraint message shown to the caller.
    pub message: String,
}

impl FieldViolation {
    /// Creates a violation for the given field.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request shape validation failed; maps to 400.
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    /// No task exists with the given identifier; maps to 404.
    #[error("task not found with id: {0}")]
    NotFound(TaskId),

    /// The storage layer failed; maps to 500. The cause is logged, never
    /// sent to the caller.
    #[error("storage failure")]
    Storage(#[source] TaskRepositoryError),
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => Self::Validation(vec![violation_for(&domain)]),
            TaskServiceError::NotFound(id) => Self::NotFound(id),
            TaskServiceError::Storage(storage) => Self::Storage(storage),
        }
    }
}

/// Maps a domain validation error onto the request field it concerns.
fn violation_for(err: &TaskDomainError) -> FieldViolation {
    match err {
        TaskDomainError::EmptyTitle => FieldViolation::new("title", "Title is required"),
        TaskDomainError::TitleTooLong(_) => {
            FieldViolation::new("title", "Title must be between 1 and 255 characters")
        }
        TaskDomainError::DescriptionTooLong(_) => {
            FieldViolation::new("description", "Description cannot exceed 1000 characters")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "validation failed", "fields": fields })),
            )
                .into_response(),
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Task not found with id: {id}") })),
            )
                .into_response(),
            Self::Storage(cause) => {
                error!(error = %cause, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
