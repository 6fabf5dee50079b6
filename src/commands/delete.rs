use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd<S: TaskStore>(service: &TaskService<S>, args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let task = service.get_task(args.id)?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.id, task.title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    service.delete_task(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}
