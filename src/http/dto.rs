//! Wire-format request/response shapes and boundary validation.
//!
//! Request bodies deserialize every field as optional so that shape
//! problems surface as field-level 400 responses from the explicit
//! validation functions below, not as opaque deserialization rejections.
//! A failed validation short-circuits before any service call.

use super::error::{ApiError, FieldViolation};
use crate::task::{
    domain::{Task, TaskDescription, TaskStatus, TaskTitle},
    services::{CreateTask, UpdateTask},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response shape for a task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Creation timestamp, RFC 3339.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, RFC 3339.
    pub updated_at: DateTime<Utc>,
}

impl TaskDto {
    /// Maps a domain task onto the wire shape.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Request body for creating a task.
///
/// There is no status field; a caller-supplied one is dropped at
/// deserialization and the task starts as `PENDING` regardless.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Required task title.
    pub title: Option<String>,
    /// Optional task description.
    pub description: Option<String>,
}

/// Request body for replacing a task's mutable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskBody {
    /// Required task title.
    pub title: Option<String>,
    /// Optional task description; absence clears the stored value.
    pub description: Option<String>,
    /// Optional replacement status.
    pub status: Option<String>,
}

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Optional status filter.
    pub status: Option<String>,
}

/// Query parameters for the status-only update endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    /// Required replacement status.
    pub status: Option<String>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Required title fragment.
    pub q: Option<String>,
}

pub(crate) fn validate_create(body: &CreateTaskBody) -> Result<CreateTask, ApiError> {
    let mut violations = Vec::new();
    let title = validated_title(body.title.as_deref(), &mut violations);
    let description = validated_description(body.description.as_deref(), &mut violations);
    match (title, violations.is_empty()) {
        (Some(valid_title), true) => {
            let mut request = CreateTask::new(valid_title);
            if let Some(value) = description {
                request = request.with_description(value);
            }
            Ok(request)
        }
        _ => Err(ApiError::Validation(violations)),
    }
}

pub(crate) fn validate_update(body: &UpdateTaskBody) -> Result<UpdateTask, ApiError> {
    let mut violations = Vec::new();
    let title = validated_title(body.title.as_deref(), &mut violations);
    let description = validated_description(body.description.as_deref(), &mut violations);
    let status = validated_status(body.status.as_deref(), &mut violations);
    match (title, violations.is_empty()) {
        (Some(valid_title), true) => {
            let mut request = UpdateTask::new(valid_title);
            if let Some(value) = description {
                request = request.with_description(value);
            }
            if let Some(value) = status {
                request = request.with_status(value);
            }
            Ok(request)
        }
        _ => Err(ApiError::Validation(violations)),
    }
}

pub(crate) fn validate_status_filter(value: Option<&str>) -> Result<Option<TaskStatus>, ApiError> {
    let mut violations = Vec::new();
    let status = validated_status(value, &mut violations);
    if violations.is_empty() {
        Ok(status)
    } else {
        Err(ApiError::Validation(violations))
    }
}

pub(crate) fn validate_required_status(value: Option<&str>) -> Result<TaskStatus, ApiError> {
    let mut violations = Vec::new();
    match validated_status(value, &mut violations) {
        Some(parsed) => Ok(parsed),
        None => {
            if violations.is_empty() {
                violations.push(FieldViolation::new("status", "status parameter is required"));
            }
            Err(ApiError::Validation(violations))
        }
    }
}

pub(crate) fn validate_search_query(value: Option<&str>) -> Result<String, ApiError> {
    value.map(str::to_owned).ok_or_else(|| {
        ApiError::Validation(vec![FieldViolation::new("q", "q parameter is required")])
    })
}

fn validated_title(value: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    let Some(raw) = value else {
        violations.push(FieldViolation::new("title", "Title is required"));
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        violations.push(FieldViolation::new("title", "Title is required"));
        return None;
    }
    if trimmed.chars().count() > TaskTitle::MAX_CHARS {
        violations.push(FieldViolation::new(
            "title",
            "Title must be between 1 and 255 characters",
        ));
        return None;
    }
    Some(trimmed.to_owned())
}

fn validated_description(
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let raw = value?;
    if raw.chars().count() > TaskDescription::MAX_CHARS {
        violations.push(FieldViolation::new(
            "description",
            "Description cannot exceed 1000 characters",
        ));
        return None;
    }
    Some(raw.to_owned())
}

fn validated_status(
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<TaskStatus> {
    let raw = value?;
    match TaskStatus::try_from(raw) {
        Ok(status) => Some(status),
        Err(err) => {
            violations.push(FieldViolation::new("status", err.to_string()));
            None
        }
    }
}
