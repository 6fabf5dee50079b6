use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Priority; 0 is normal, higher is more urgent
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    priority: i32,
    /// Due date as RFC 3339, e.g. 2025-01-15T18:00:00+02:00
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: AddArgs) -> Result<()> {
    let task = service.create_task(&args.title, args.priority, args.due.as_deref())?;
    msg_success!(Message::TaskCreated(task.id, task.title));

    Ok(())
}
