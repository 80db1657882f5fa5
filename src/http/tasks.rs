//! Task route handlers.
//!
//! Each handler validates the request shape, delegates to the service,
//! and maps the result onto the wire format. No business rules here.

use super::{
    AppState,
    dto::{
        self, CreateTaskBody, ListQuery, SearchQuery, StatusQuery, TaskDto, UpdateTaskBody,
    },
    error::ApiError,
};
use crate::task::{domain::TaskId, ports::TaskRepository};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use mockable::Clock;

/// `GET /api/tasks`: lists tasks, optionally filtered by `?status=`.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let filter = dto::validate_status_filter(params.status.as_deref())?;
    let tasks = state.service.list_tasks(filter).await?;
    Ok(Json(tasks.iter().map(TaskDto::from_task).collect()))
}

/// `GET /api/tasks/{id}`: fetches a single task.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.service.get_task(TaskId::new(id)).await?;
    Ok(Json(TaskDto::from_task(&task)))
}

/// `POST /api/tasks`: creates a pending task, returning 201.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskDto>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = dto::validate_create(&body)?;
    let task = state.service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(TaskDto::from_task(&task))))
}

/// `PUT /api/tasks/{id}`: replaces title, description, and optionally
/// status.
pub async fn update_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let request = dto::validate_update(&body)?;
    let task = state.service.update_task(TaskId::new(id), request).await?;
    Ok(Json(TaskDto::from_task(&task)))
}

/// `PATCH /api/tasks/{id}/status`: overwrites the status only, taken
/// from the required `?status=` parameter.
pub async fn update_task_status<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
    Query(params): Query<StatusQuery>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let status = dto::validate_required_status(params.status.as_deref())?;
    let task = state.service.update_status(TaskId::new(id), status).await?;
    Ok(Json(TaskDto::from_task(&task)))
}

/// `DELETE /api/tasks/{id}`: removes a task permanently, returning 204.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state.service.delete_task(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/tasks/search`: case-insensitive title substring search via
/// the required `?q=` parameter.
pub async fn search_tasks<R, C>(
    State(state): State<AppState<R, C>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let query = dto::validate_search_query(params.q.as_deref())?;
    let tasks = state.service.search_tasks(&query).await?;
    Ok(Json(tasks.iter().map(TaskDto::from_task).collect()))
}
