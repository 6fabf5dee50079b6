use super::print_json;
use crate::db::tasks::TaskStore;
use crate::libs::{messages::Message, service::TaskService, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: PriorityArgs) -> Result<()> {
    let groups = service.get_tasks_by_priority()?;

    if args.json {
        return print_json(&groups);
    }

    if groups.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    // Most urgent first.
    for (priority, tasks) in groups.iter().rev() {
        msg_print!(Message::PriorityHeader(*priority, tasks.len()), true);
        View::tasks(tasks);
    }

    Ok(())
}
