pub mod add;
pub mod delete;
pub mod list;
pub mod overdue;
pub mod priority;
pub mod toggle;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks grouped by status")]
    List(list::ListArgs),
    #[command(about = "List tasks grouped by priority")]
    Priority(priority::PriorityArgs),
    #[command(about = "List open tasks whose due date has passed")]
    Overdue(overdue::OverdueArgs),
    #[command(about = "Mark a task completed, or active again")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let service = open_service()?;

        match cli.command {
            Commands::Add(args) => add::cmd(&service, args),
            Commands::List(args) => list::cmd(&service, args),
            Commands::Priority(args) => priority::cmd(&service, args),
            Commands::Overdue(args) => overdue::cmd(&service, args),
            Commands::Toggle(args) => toggle::cmd(&service, args),
            Commands::Delete(args) => delete::cmd(&service, args),
        }
    }
}

/// Loads configuration and opens the store. Any failure here is fatal.
pub fn open_service() -> Result<TaskService<Tasks>> {
    let config = Config::load().map_err(|e| msg_error_anyhow!(Message::ConfigLoadFailed(e.to_string())))?;
    let tasks = Tasks::new(&config.db).map_err(|e| msg_error_anyhow!(Message::StoreOpenFailed(e.to_string())))?;

    Ok(TaskService::new(tasks))
}

/// Pretty-prints `value` as JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
