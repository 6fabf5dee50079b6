//! Display implementation for taskdesk application messages.
//!
//! All user-facing text lives here, so commands and the store only deal in
//! [`Message`] variants and their parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task '{}' created with ID {}", title, id),
            Message::TaskToggled(id, completed) => {
                if *completed {
                    format!("Task {} marked as completed", id)
                } else {
                    format!("Task {} marked as active", id)
                }
            }
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::InvalidDueDate(input, error) => {
                format!("invalid date format: '{}' ({}); expected RFC 3339, e.g. 2025-01-15T18:00:00+02:00", input, error)
            }
            Message::ConfirmDeleteTask(id, title) => format!("Delete task {} '{}'?", id, title),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks: {}", error),
            Message::NoTasksFound => "No tasks yet. Add one with `taskdesk add <title>`.".to_string(),
            Message::ActiveTasksHeader(count) => format!("Active ({})", count),
            Message::CompletedTasksHeader(count) => format!("Completed ({})", count),
            Message::PriorityHeader(priority, count) => format!("Priority {} ({})", priority, count),
            Message::OverdueTasksHeader(count) => format!("Overdue ({})", count),
            Message::NoOverdueTasks => "Nothing is overdue.".to_string(),

            // === STORE MESSAGES ===
            Message::StoreOpened(path) => format!("Opened task database at {}", path),
            Message::StoreOpenFailed(error) => format!("Failed to open task database: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoadFailed(error) => format!("Failed to load configuration: {}", error),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_due_date_mentions_format() {
        let text = Message::InvalidDueDate("not-a-date".into(), "input contains invalid characters".into()).to_string();
        assert!(text.starts_with("invalid date format"));
        assert!(text.contains("not-a-date"));
    }

    #[test]
    fn test_toggle_message_reflects_state() {
        assert_eq!(Message::TaskToggled(3, true).to_string(), "Task 3 marked as completed");
        assert_eq!(Message::TaskToggled(3, false).to_string(), "Task 3 marked as active");
    }
}
