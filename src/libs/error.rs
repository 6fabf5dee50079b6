//! Error taxonomy for the task store and service.
//!
//! Every failure belongs to one of three classes (see [`ErrorKind`]):
//! malformed input, a reference to a missing task, or a persistence failure.
//! Migration failures at startup count as persistence failures.

use super::service::TaskList;
use thiserror::Error;

pub type Result<T, E = TaskError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("Task with ID {0} not found")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Database migration failed: {0}")]
    Migration(String),
}

/// Failure class of a [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::Validation,
            TaskError::NotFound(_) => ErrorKind::NotFound,
            TaskError::Storage(_) | TaskError::Migration(_) => ErrorKind::Storage,
        }
    }
}

/// Failure of a status listing.
///
/// Carries an empty [`TaskList`] next to the cause so callers always have
/// something renderable.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct StatusError {
    pub fallback: TaskList,
    #[source]
    pub source: TaskError,
}

impl StatusError {
    pub fn new(source: TaskError) -> Self {
        StatusError {
            fallback: TaskList::default(),
            source,
        }
    }

    pub fn into_parts(self) -> (TaskList, TaskError) {
        (self.fallback, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TaskError::Validation("bad".into()).kind(), ErrorKind::Validation);
        assert_eq!(TaskError::NotFound(7).kind(), ErrorKind::NotFound);
        assert_eq!(TaskError::Migration("boom".into()).kind(), ErrorKind::Storage);
        assert_eq!(
            TaskError::Storage(rusqlite::Error::QueryReturnedNoRows).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn test_status_error_fallback_is_empty() {
        let (list, source) = StatusError::new(TaskError::NotFound(1)).into_parts();
        assert!(list.active.is_empty());
        assert!(list.completed.is_empty());
        assert_eq!(source.kind(), ErrorKind::NotFound);
    }
}
