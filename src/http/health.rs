//! Health, liveness, readiness, and info endpoints.
//!
//! Static-status responders for container orchestration probes. These sit
//! outside the task core and touch no storage.

use super::AppState;
use crate::task::ports::TaskRepository;
use axum::{Json, extract::State};
use chrono::Utc;
use mockable::Clock;
use serde_json::{Value, json};

/// Service name reported by the root and info endpoints.
const SERVICE_NAME: &str = "taskboard";

/// `GET /`: confirms the service is running.
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "running",
        "timestamp": Utc::now(),
    }))
}

/// `GET /health/live`: liveness probe.
pub async fn liveness() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

/// `GET /health/ready`: readiness probe.
pub async fn readiness() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

/// `GET /info`: service metadata and uptime.
pub async fn info<R, C>(State(state): State<AppState<R, C>>) -> Json<Value>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let uptime_secs = (Utc::now() - state.started_at).num_seconds();
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "startedAt": state.started_at,
        "uptimeSecs": uptime_secs,
    }))
}
