use super::db::Db;
use crate::libs::config::DbConfig;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::{NewTask, Task};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

const TASK_COLUMNS: &str = "id, title, completed, priority, due_date, created_at, updated_at";
const INSERT_TASK: &str = "INSERT INTO tasks (title, completed, priority, due_date, created_at, updated_at) VALUES (?1, FALSE, ?2, ?3, ?4, ?4)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, completed = ?3, priority = ?4, due_date = ?5, updated_at = ?6 WHERE id = ?1";
const TOGGLE_TASK: &str = "UPDATE tasks SET completed = NOT completed, updated_at = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Durable CRUD over tasks. No business rules live here.
///
/// The store is the only writer of `id`, `created_at` and `updated_at`.
pub trait TaskStore {
    /// Inserts a new task and returns it with its assigned id and timestamps.
    fn create(&self, task: &NewTask) -> Result<Task>;

    /// Every task, ordered by id.
    fn get_all(&self) -> Result<Vec<Task>>;

    fn get_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// Writes every mutable field of `task`, keyed by its id, and refreshes
    /// `updated_at`. `created_at` is left alone.
    fn update(&self, task: &Task) -> Result<Task>;

    fn delete(&self, id: i64) -> Result<()>;

    /// Flips `completed` in a single statement and returns the updated task.
    fn toggle_complete(&self, id: i64) -> Result<Task>;
}

/// SQLite-backed [`TaskStore`].
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the database and applies pending migrations.
    pub fn new(config: &DbConfig) -> Result<Tasks> {
        let db = Db::new(config)?;

        Ok(Tasks { conn: db.conn })
    }

    fn select_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], Task::from_row)
            .optional()
            .map_err(Into::into)
    }

    fn require(&self, id: i64) -> Result<Task> {
        self.select_by_id(id)?.ok_or(TaskError::NotFound(id))
    }
}

impl TaskStore for Tasks {
    fn create(&self, task: &NewTask) -> Result<Task> {
        let now = Utc::now();
        self.conn.execute(INSERT_TASK, params![task.title, task.priority, task.due_date, now])?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title = %task.title, priority = task.priority, "task created");

        self.require(id)
    }

    fn get_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))?;
        let task_iter = stmt.query_map([], Task::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.select_by_id(id)
    }

    fn update(&self, task: &Task) -> Result<Task> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![task.id, task.title, task.completed, task.priority, task.due_date, Utc::now()],
        )?;
        if affected == 0 {
            return Err(TaskError::NotFound(task.id));
        }
        debug!(id = task.id, "task updated");

        self.require(task.id)
    }

    fn delete(&self, id: i64) -> Result<()> {
        // DELETE succeeds on a missing row, so the affected count is the only signal.
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, "task deleted");

        Ok(())
    }

    fn toggle_complete(&self, id: i64) -> Result<Task> {
        let affected = self.conn.execute(TOGGLE_TASK, params![id, Utc::now()])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }

        let task = self.require(id)?;
        debug!(id, completed = task.completed, "task toggled");

        Ok(task)
    }
}
