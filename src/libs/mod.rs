//! Core library modules for taskdesk.
//!
//! - **Domain**: the [`task::Task`] entity and the [`service::TaskService`]
//!   that derives status, priority and overdue views from it
//! - **Errors**: the [`error::TaskError`] taxonomy
//! - **Infrastructure**: configuration, data directory, messages, table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::config::Config;
//! use taskdesk::libs::service::TaskService;
//!
//! let config = Config::load()?;
//! let service = TaskService::new(Tasks::new(&config.db)?);
//! service.create_task("Pay rent", 1, Some("2025-01-31T12:00:00Z"))?;
//! let overdue = service.get_overdue_tasks()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod service;
pub mod task;
pub mod view;
