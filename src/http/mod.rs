//! HTTP surface for the task service.
//!
//! Translates HTTP verbs, paths, and query parameters into service calls
//! and maps domain results back to wire-format responses and status
//! codes. Handlers stay thin; business rules live in the service layer.
//!
//! Endpoints:
//!
//! - `GET    /api/tasks` - list, optional `?status=` filter
//! - `GET    /api/tasks/search` - `?q=` title substring search
//! - `GET    /api/tasks/{id}` - fetch one
//! - `POST   /api/tasks` - create (201)
//! - `PUT    /api/tasks/{id}` - replace title/description/status
//! - `PATCH  /api/tasks/{id}/status` - `?status=` only
//! - `DELETE /api/tasks/{id}` - remove (204)
//! - `GET    /`, `/health/live`, `/health/ready`, `/info` - probes

pub mod dto;
pub mod error;
pub mod health;
pub mod tasks;

#[cfg(test)]
mod tests;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{
    Router,
    http::Method,
    routing::{get, patch},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application dependencies handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task orchestration service.
    pub service: Arc<TaskService<R, C>>,
    /// Service start time, reported by the info endpoint.
    pub started_at: DateTime<Utc>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates application state around a wired service.
    #[must_use]
    pub fn new(service: Arc<TaskService<R, C>>) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            started_at: self.started_at,
        }
    }
}

/// Builds the application router with CORS applied to every route.
pub fn build_router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(health::root))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/info", get(health::info))
        .route(
            "/api/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route("/api/tasks/search", get(tasks::search_tasks))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/tasks/{id}/status", patch(tasks::update_task_status))
        .layer(cors_layer())
        .with_state(state)
}

/// Serves the router on the given address until the listener fails.
///
/// # Errors
///
/// Returns an [`std::io::Error`] when binding or serving fails.
pub async fn serve<R, C>(addr: SocketAddr, state: AppState<R, C>) -> std::io::Result<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let router = build_router(state);
    info!("task API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Development CORS policy: any origin, the API's methods, any headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
