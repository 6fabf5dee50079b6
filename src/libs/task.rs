//! Task entity and its creation input.
//!
//! `Task` is the only record the application tracks. Identity and both
//! timestamps belong to the store; everything else is supplied by the caller
//! through [`NewTask`] or a full-record update.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A persisted task.
///
/// Serializes with camelCase keys (`dueDate`, `createdAt`, `updatedAt`) and
/// omits `dueDate` when the task has no deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Larger is more urgent by convention; 0 is normal. Unbounded.
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from a row selected with the column order of `TASK_COLUMNS`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            completed: row.get(2)?,
            priority: row.get(3)?,
            due_date: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    /// Whether the task is still open and its due date lies strictly before `now`.
    ///
    /// Tasks without a due date are never overdue, and neither are completed ones.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < now,
            None => false,
        }
    }
}

/// Input for inserting a task. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub priority: i32,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: &str, priority: i32, due_date: Option<DateTime<Utc>>) -> Self {
        NewTask {
            title: title.to_string(),
            priority,
            due_date,
        }
    }
}
