//! Business layer over a [`TaskStore`].
//!
//! Writes are thin pass-throughs, apart from due-date parsing on creation.
//! Reads fetch the full task list and derive a view in memory. Views are
//! computed on every call and never persisted.

use super::error::{Result, StatusError, TaskError};
use super::messages::Message;
use super::task::{NewTask, Task};
use crate::db::tasks::TaskStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Active and completed tasks, each in store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskList {
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
}

pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        TaskService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates an active task.
    ///
    /// `due_date`, when present and non-empty, must be an RFC 3339 date-time
    /// with an offset (e.g. `2025-01-15T18:00:00+02:00`); it is stored in UTC.
    /// The value is not trimmed, so surrounding whitespace is a validation error.
    /// Title and priority are taken as given.
    ///
    /// # Errors
    ///
    /// `TaskError::Validation` for an unparseable due date (nothing is written),
    /// `TaskError::Storage` if the insert fails.
    pub fn create_task(&self, title: &str, priority: i32, due_date: Option<&str>) -> Result<Task> {
        let due_date = match due_date {
            Some(raw) if !raw.is_empty() => Some(parse_due_date(raw)?),
            _ => None,
        };

        self.store.create(&NewTask::new(title, priority, due_date))
    }

    /// Splits all tasks into active and completed.
    ///
    /// On failure the returned [`StatusError`] still holds an empty list in
    /// `fallback`, so callers can render an empty state directly.
    pub fn get_tasks_by_status(&self) -> Result<TaskList, StatusError> {
        let tasks = self.store.get_all().map_err(StatusError::new)?;

        let (completed, active): (Vec<Task>, Vec<Task>) = tasks.into_iter().partition(|task| task.completed);
        debug!(active = active.len(), completed = completed.len(), "tasks grouped by status");

        Ok(TaskList { active, completed })
    }

    pub fn toggle_task(&self, id: i64) -> Result<Task> {
        self.store.toggle_complete(id)
    }

    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.store.delete(id)
    }

    /// Groups tasks by exact priority. Priorities with no tasks have no key.
    pub fn get_tasks_by_priority(&self) -> Result<BTreeMap<i32, Vec<Task>>> {
        let mut groups: BTreeMap<i32, Vec<Task>> = BTreeMap::new();
        for task in self.store.get_all()? {
            groups.entry(task.priority).or_default().push(task);
        }

        Ok(groups)
    }

    /// Open tasks whose due date has passed, checked against the current time.
    pub fn get_overdue_tasks(&self) -> Result<Vec<Task>> {
        self.get_overdue_tasks_at(Utc::now())
    }

    pub fn get_overdue_tasks_at(&self, now: DateTime<Utc>) -> Result<Vec<Task>> {
        let overdue: Vec<Task> = self.store.get_all()?.into_iter().filter(|task| task.is_overdue(now)).collect();
        debug!(count = overdue.len(), "overdue tasks selected");

        Ok(overdue)
    }

    pub fn get_task(&self, id: i64) -> Result<Task> {
        self.store.get_by_id(id)?.ok_or(TaskError::NotFound(id))
    }

    /// Replaces every mutable field of an existing task.
    pub fn update_task(&self, task: &Task) -> Result<Task> {
        self.store.update(task)
    }
}

/// Parses an RFC 3339 date-time and normalizes it to UTC.
///
/// Only the strict form is accepted: an uppercase `T` between date and time,
/// and either a numeric offset or an uppercase `Z`.
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    let invalid = |reason: String| TaskError::Validation(Message::InvalidDueDate(raw.to_string(), reason).to_string());

    // chrono also takes a space or a lowercase `t`/`z` here.
    if raw.get(10..11) != Some("T") || raw.ends_with('z') {
        return Err(invalid("expected 'T' between date and time and an offset or 'Z'".to_string()));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| invalid(e.to_string()))
}
