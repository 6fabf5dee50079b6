//! # Taskdesk - personal task tracking
//!
//! Tasks have a title, a priority and an optional due date. They can be
//! listed by status or priority, filtered to the overdue ones, toggled
//! between active and completed, and deleted.
//!
//! ## Layers
//!
//! - **Entity**: [`libs::task::Task`]
//! - **Store**: [`db::tasks::TaskStore`], implemented over SQLite by [`db::tasks::Tasks`]
//! - **Service**: [`libs::service::TaskService`], input shaping and derived views
//! - **CLI**: [`commands::Cli`], a thin shell over the service
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
