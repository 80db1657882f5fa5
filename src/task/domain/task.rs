//! Task aggregate root and construction types.

use super::{TaskDescription, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Draft of a task that has not been persisted yet.
///
/// A draft has no identifier; storage assigns one on insert. The status
/// is always [`TaskStatus::Pending`]; callers cannot choose an initial
/// status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NewTask {
    /// Creates a pending task draft stamped with the current clock time.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<TaskDescription>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            title,
            description,
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the draft title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the draft description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the draft status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Instances only exist for persisted records: either returned by the
/// repository on insert or reconstructed from storage. Every mutator
/// re-stamps `updated_at` from the supplied clock, keeping
/// `created_at <= updated_at` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a full update: title and description are overwritten
    /// unconditionally, status only when one is supplied.
    pub fn apply_update(
        &mut self,
        title: TaskTitle,
        description: Option<TaskDescription>,
        status: Option<TaskStatus>,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description;
        if let Some(next_status) = status {
            self.status = next_status;
        }
        self.touch(clock);
    }

    /// Overwrites the status, leaving title and description untouched.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
