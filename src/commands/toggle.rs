use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task ID
    id: i64,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: ToggleArgs) -> Result<()> {
    let task = service.toggle_task(args.id)?;
    msg_success!(Message::TaskToggled(task.id, task.completed));

    Ok(())
}
