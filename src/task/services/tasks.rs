//! Service layer for task creation, mutation, lookup, and removal.

use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// There is no status field: new tasks always start as
/// [`TaskStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    title: String,
    description: Option<String>,
}

impl CreateTask {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for replacing a task's mutable fields.
///
/// Title and description are overwritten unconditionally; an absent
/// description clears the field. The status is overwritten only when one
/// is supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTask {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTask {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task exists with the given identifier.
    #[error("task not found with id: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Holds no cross-call state: each operation performs one logical unit of
/// work against the repository. The update operations read then write
/// without a compare-and-swap, so concurrent writers to the same id are
/// last-writer-wins.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title or
    /// description is out of bounds, or [`TaskServiceError::Storage`] when
    /// persistence fails.
    pub async fn create_task(&self, request: CreateTask) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request
            .description
            .map(TaskDescription::new)
            .transpose()?;
        let draft = NewTask::new(title, description, &*self.clock);
        Ok(self.repository.insert(&draft).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the id is unknown.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Replaces a task's title, description, and optionally status, then
    /// re-stamps its modification timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] on out-of-bound fields or
    /// [`TaskServiceError::NotFound`] when the id is unknown.
    pub async fn update_task(&self, id: TaskId, request: UpdateTask) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request
            .description
            .map(TaskDescription::new)
            .transpose()?;
        let mut task = self.get_task(id).await?;
        task.apply_update(title, description, request.status, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Overwrites a task's status only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the id is unknown.
    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id).await?;
        task.set_status(status, &*self.clock);
        Ok(self.repository.update(&task).await?)
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the id is unknown.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await.map_err(Into::into)
    }

    /// Lists tasks, optionally filtered by status.
    ///
    /// Without a filter, tasks come back newest first; with one, every
    /// task of that status in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the lookup fails.
    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        let tasks = match status {
            Some(status) => self.repository.find_by_status(status).await?,
            None => self.repository.list_all().await?,
        };
        Ok(tasks)
    }

    /// Searches tasks by case-insensitive title substring.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the lookup fails.
    pub async fn search_tasks(&self, query: &str) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.search_by_title(query).await?)
    }
}
