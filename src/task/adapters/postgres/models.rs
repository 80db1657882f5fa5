//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Lifecycle status in canonical storage form.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records. The id is assigned by the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Lifecycle status in canonical storage form.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model for task records. `created_at` is deliberately absent:
/// it is set once at insert and never modified.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional task description; `None` clears the column.
    pub description: Option<String>,
    /// Lifecycle status in canonical storage form.
    pub status: String,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
