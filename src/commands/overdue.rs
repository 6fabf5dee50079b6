use super::print_json;
use crate::db::tasks::TaskStore;
use crate::libs::{messages::Message, service::TaskService, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct OverdueArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: OverdueArgs) -> Result<()> {
    let overdue = service.get_overdue_tasks()?;

    if args.json {
        return print_json(&overdue);
    }

    if overdue.is_empty() {
        msg_info!(Message::NoOverdueTasks);
        return Ok(());
    }

    msg_print!(Message::OverdueTasksHeader(overdue.len()), true);
    View::tasks(&overdue);

    Ok(())
}
