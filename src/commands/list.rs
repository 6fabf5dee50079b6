use super::print_json;
use crate::db::tasks::TaskStore;
use crate::libs::error::StatusError;
use crate::libs::{messages::Message, service::TaskList, service::TaskService, view::View};
use crate::{msg_error_anyhow, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: ListArgs) -> Result<()> {
    let (list, failure) = split_status(service.get_tasks_by_status());

    if args.json {
        print_json(&list)?;
    } else if list.active.is_empty() && list.completed.is_empty() {
        if failure.is_none() {
            msg_info!(Message::NoTasksFound);
        }
    } else {
        msg_print!(Message::ActiveTasksHeader(list.active.len()), true);
        View::tasks(&list.active);
        msg_print!(Message::CompletedTasksHeader(list.completed.len()), true);
        View::tasks(&list.completed);
    }

    // Reported once, by main.
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Separates a status listing into the list to render and the error to report.
fn split_status(result: Result<TaskList, StatusError>) -> (TaskList, Option<anyhow::Error>) {
    match result {
        Ok(list) => (list, None),
        Err(e) => {
            let (list, source) = e.into_parts();
            (list, Some(msg_error_anyhow!(Message::TasksLoadFailed(source.to_string()))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::error::TaskError;

    #[test]
    fn test_failed_listing_renders_empty_and_carries_one_message() {
        let failed = Err(StatusError::new(TaskError::Storage(rusqlite::Error::InvalidQuery)));

        let (list, failure) = split_status(failed);

        assert_eq!(list, TaskList::default());
        let text = failure.unwrap().to_string();
        assert_eq!(text.matches("Failed to load tasks").count(), 1);
    }

    #[test]
    fn test_successful_listing_has_no_failure() {
        let (list, failure) = split_status(Ok(TaskList::default()));

        assert!(list.active.is_empty());
        assert!(failure.is_none());
    }
}
