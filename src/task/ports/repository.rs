//! Repository port for task persistence, lookup, and removal.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations provide per-call atomicity for single-record reads and
/// writes; there is no multi-record transaction in this contract. The
/// read-then-write update path in the service layer is therefore
/// last-writer-wins under concurrent modification of the same id.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, assigning its identifier.
    ///
    /// Returns the persisted task with id and timestamps populated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on storage faults.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks ordered by creation time descending, newest
    /// first. Creation-time ties are broken by insertion order.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks with the given status, in insertion order.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks whose title contains the given fragment,
    /// case-insensitively, in insertion order. An empty fragment matches
    /// every task.
    async fn search_by_title(&self, fragment: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists changes to an existing task.
    ///
    /// Returns the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
