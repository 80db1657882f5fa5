//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be blank")]
    EmptyTitle,

    /// The title exceeds the persisted length bound.
    #[error("task title must not exceed 255 characters, got {0}")]
    TitleTooLong(usize),

    /// The description exceeds the persisted length bound.
    #[error("task description must not exceed 1000 characters, got {0}")]
    DescriptionTooLong(usize),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
