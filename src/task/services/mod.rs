//! Application services for task management.

mod tasks;

pub use tasks::{CreateTask, TaskService, TaskServiceError, TaskServiceResult, UpdateTask};
