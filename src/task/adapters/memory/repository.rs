//! In-memory repository for task management tests.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers come from a monotonic counter, so iterating the id-ordered
/// map yields tasks in insertion order, matching the secondary ordering
/// the `PostgreSQL` adapter produces.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let id = TaskId::new(state.next_id);
        state.next_id += 1;

        let stored = Task::from_persisted(PersistedTaskData {
            id,
            title: task.title().clone(),
            description: task.description().cloned(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        });
        state.tasks.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        // Stable sort over the id-ordered map keeps insertion order for
        // creation-time ties.
        tasks.sort_by_key(|task| Reverse(task.created_at()));
        Ok(tasks)
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn search_by_title(&self, fragment: &str) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let needle = fragment.to_lowercase();
        Ok(state
            .tasks
            .values()
            .filter(|task| task.title().as_str().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
