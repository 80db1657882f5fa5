//! Handler tests exercising the HTTP boundary against the in-memory
//! repository, including the status-code mapping of [`ApiError`].

use crate::http::{
    AppState,
    dto::{CreateTaskBody, ListQuery, SearchQuery, StatusQuery, TaskDto, UpdateTaskBody},
    error::{ApiError, FieldViolation},
    tasks,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::TaskRepositoryError,
    services::TaskService,
    tests::support::SteppingClock,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;

type TestState = AppState<InMemoryTaskRepository, SteppingClock>;

#[fixture]
fn state() -> TestState {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = Arc::new(TaskService::new(repository, Arc::new(SteppingClock::new())));
    AppState::new(service)
}

async fn create(state: &TestState, title: &str) -> TaskDto {
    let body = CreateTaskBody {
        title: Some(title.to_owned()),
        description: None,
    };
    let (status, Json(dto)) = tasks::create_task(State(state.clone()), Json(body))
        .await
        .expect("create should succeed");
    assert_eq!(status, StatusCode::CREATED);
    dto
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_ignores_caller_supplied_status(state: TestState) {
    // A status field in the payload is dropped at deserialization; the
    // created task is PENDING regardless.
    let body: CreateTaskBody = serde_json::from_value(json!({
        "title": "Learn Docker",
        "status": "COMPLETED",
    }))
    .expect("unknown fields are ignored");

    let (status, Json(dto)) = tasks::create_task(State(state), Json(body))
        .await
        .expect("create should succeed");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dto.status, TaskStatus::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_returns_not_found_for_unknown_id(state: TestState) {
    let result = tasks::get_task(State(state), Path(404)).await;
    assert!(matches!(result, Err(ApiError::NotFound(id)) if id == TaskId::new(404)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_replaces_fields(state: TestState) {
    let created = create(&state, "Learn Docker").await;

    let body = UpdateTaskBody {
        title: Some("Learn Docker and Kubernetes".to_owned()),
        description: Some("All modules".to_owned()),
        status: Some("IN_PROGRESS".to_owned()),
    };
    let Json(updated) = tasks::update_task(State(state), Path(created.id), Json(body))
        .await
        .expect("update should succeed");

    assert_eq!(updated.title, "Learn Docker and Kubernetes");
    assert_eq!(updated.description.as_deref(), Some("All modules"));
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_status_parameter(state: TestState) {
    let first = create(&state, "Learn Docker").await;
    create(&state, "Write tests").await;

    let Json(_) = tasks::update_task_status(
        State(state.clone()),
        Path(first.id),
        Query(StatusQuery {
            status: Some("IN_PROGRESS".to_owned()),
        }),
    )
    .await
    .expect("status update should succeed");

    let Json(in_progress) = tasks::list_tasks(
        State(state.clone()),
        Query(ListQuery {
            status: Some("IN_PROGRESS".to_owned()),
        }),
    )
    .await
    .expect("listing should succeed");

    let Json(all) = tasks::list_tasks(State(state), Query(ListQuery { status: None }))
        .await
        .expect("listing should succeed");

    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress.first().map(|dto| dto.id), Some(first.id));
    assert_eq!(all.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_case_insensitive_substring(state: TestState) {
    create(&state, "Learn Docker").await;
    create(&state, "Write tests").await;

    let Json(matches) = tasks::search_tasks(
        State(state),
        Query(SearchQuery {
            q: Some("oc".to_owned()),
        }),
    )
    .await
    .expect("search should succeed");

    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.first().map(|dto| dto.title.as_str()),
        Some("Learn Docker")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_patch_delete_get_flow(state: TestState) {
    let created = create(&state, "Learn Docker").await;
    assert_eq!(created.status, TaskStatus::Pending);

    let Json(patched) = tasks::update_task_status(
        State(state.clone()),
        Path(created.id),
        Query(StatusQuery {
            status: Some("IN_PROGRESS".to_owned()),
        }),
    )
    .await
    .expect("status update should succeed");
    assert_eq!(patched.status, TaskStatus::InProgress);
    assert!(patched.updated_at > created.updated_at);

    let deleted = tasks::delete_task(State(state.clone()), Path(created.id))
        .await
        .expect("delete should succeed");
    assert_eq!(deleted, StatusCode::NO_CONTENT);

    let result = tasks::get_task(State(state), Path(created.id)).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[rstest]
fn task_dto_serializes_camel_case_fields() {
    let dto = TaskDto {
        id: 1,
        title: "Learn Docker".to_owned(),
        description: None,
        status: TaskStatus::Pending,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };
    let value = serde_json::to_value(&dto).expect("serializable dto");
    let object = value.as_object().expect("dto serializes to an object");

    for key in ["id", "title", "description", "status", "createdAt", "updatedAt"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
}

#[rstest]
fn api_errors_map_to_expected_status_codes() {
    let validation =
        ApiError::Validation(vec![FieldViolation::new("title", "Title is required")]);
    assert_eq!(
        validation.into_response().status(),
        StatusCode::BAD_REQUEST
    );

    let not_found = ApiError::NotFound(TaskId::new(42));
    assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

    let storage = ApiError::Storage(TaskRepositoryError::persistence(std::io::Error::other(
        "connection reset",
    )));
    assert_eq!(
        storage.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
