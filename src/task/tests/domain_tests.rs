//! Domain-focused tests for task values and the aggregate.

use super::support::SteppingClock;
use crate::task::domain::{
    NewTask, ParseTaskStatusError, PersistedTaskData, Task, TaskDescription, TaskDomainError,
    TaskId, TaskStatus, TaskTitle,
};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::new()
}

fn persisted_task(clock: &impl Clock) -> Task {
    let timestamp = clock.utc();
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(1),
        title: TaskTitle::new("Learn Docker").expect("valid title"),
        description: Some(TaskDescription::new("Module 2").expect("valid description")),
        status: TaskStatus::Pending,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

#[rstest]
fn task_title_trims_and_accepts_valid_values() {
    let title = TaskTitle::new("  Learn Docker  ").expect("valid title");
    assert_eq!(title.as_str(), "Learn Docker");
}

#[rstest]
fn task_title_rejects_blank_values() {
    assert_eq!(TaskTitle::new("    "), Err(TaskDomainError::EmptyTitle));
    assert_eq!(TaskTitle::new(""), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_title_rejects_overlong_values() {
    let raw = "x".repeat(256);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong(256))
    );
}

#[rstest]
fn task_title_accepts_boundary_length() {
    let raw = "x".repeat(255);
    assert!(TaskTitle::new(raw).is_ok());
}

#[rstest]
fn task_description_accepts_empty_values() {
    let description = TaskDescription::new("").expect("valid description");
    assert_eq!(description.as_str(), "");
}

#[rstest]
fn task_description_rejects_overlong_values() {
    let raw = "y".repeat(1001);
    assert_eq!(
        TaskDescription::new(raw),
        Err(TaskDomainError::DescriptionTooLong(1001))
    );
}

#[rstest]
fn task_status_parses_case_insensitively() {
    assert_eq!(
        TaskStatus::try_from("pending"),
        Ok(TaskStatus::Pending)
    );
    assert_eq!(
        TaskStatus::try_from(" in_progress "),
        Ok(TaskStatus::InProgress)
    );
    assert_eq!(
        TaskStatus::try_from("COMPLETED"),
        Ok(TaskStatus::Completed)
    );
    assert_eq!(
        TaskStatus::try_from("Cancelled"),
        Ok(TaskStatus::Cancelled)
    );
}

#[rstest]
fn task_status_rejects_unknown_values() {
    assert_eq!(
        TaskStatus::try_from("DONE"),
        Err(ParseTaskStatusError("DONE".to_owned()))
    );
}

#[rstest]
fn task_status_round_trips_through_storage_form() {
    for status in [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
    ] {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn task_status_serializes_as_screaming_snake() {
    let value = serde_json::to_value(TaskStatus::InProgress).expect("serializable status");
    assert_eq!(value, json!("IN_PROGRESS"));
}

#[rstest]
fn new_task_is_pending_with_equal_timestamps(clock: SteppingClock) {
    let title = TaskTitle::new("Learn Docker").expect("valid title");
    let draft = NewTask::new(title, None, &clock);

    assert_eq!(draft.status(), TaskStatus::Pending);
    assert_eq!(draft.created_at(), draft.updated_at());
}

#[rstest]
fn apply_update_preserves_created_at_and_advances_updated_at(clock: SteppingClock) {
    let mut task = persisted_task(&clock);
    let created_at = task.created_at();

    task.apply_update(
        TaskTitle::new("Learn Docker and Kubernetes").expect("valid title"),
        None,
        None,
        &clock,
    );

    assert_eq!(task.created_at(), created_at);
    assert!(task.updated_at() > created_at);
    assert_eq!(task.title().as_str(), "Learn Docker and Kubernetes");
    assert!(task.description().is_none());
}

#[rstest]
fn apply_update_keeps_status_when_none_supplied(clock: SteppingClock) {
    let mut task = persisted_task(&clock);

    task.apply_update(
        TaskTitle::new("Learn Docker").expect("valid title"),
        None,
        None,
        &clock,
    );

    assert_eq!(task.status(), TaskStatus::Pending);
}

#[rstest]
fn apply_update_overwrites_status_when_supplied(clock: SteppingClock) {
    let mut task = persisted_task(&clock);

    task.apply_update(
        TaskTitle::new("Learn Docker").expect("valid title"),
        None,
        Some(TaskStatus::Completed),
        &clock,
    );

    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn set_status_changes_only_status_and_updated_at(clock: SteppingClock) {
    let mut task = persisted_task(&clock);
    let created_at = task.created_at();
    let previous_updated_at = task.updated_at();

    task.set_status(TaskStatus::InProgress, &clock);

    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.title().as_str(), "Learn Docker");
    assert_eq!(task.created_at(), created_at);
    assert!(task.updated_at() > previous_updated_at);
}
