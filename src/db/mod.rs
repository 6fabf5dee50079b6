//! Persistence layer for taskdesk.
//!
//! Everything that touches SQLite lives here: connection bootstrap, versioned
//! migrations, and the task store. The rest of the crate talks to the store
//! through the [`tasks::TaskStore`] trait.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::{TaskStore, Tasks};
//! use taskdesk::libs::config::DbConfig;
//! use taskdesk::libs::task::NewTask;
//!
//! let tasks = Tasks::new(&DbConfig::new("taskdesk.db"))?;
//! let task = tasks.create(&NewTask::new("Pay rent", 1, None))?;
//! tasks.toggle_complete(task.id)?;
//! # Ok::<(), taskdesk::libs::error::TaskError>(())
//! ```

/// Connection opening and configuration.
pub mod db;

/// Versioned schema changes and the `migrations` bookkeeping table.
pub mod migrations;

/// The task store: CRUD and the atomic completion toggle.
pub mod tasks;
