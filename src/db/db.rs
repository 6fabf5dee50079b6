use super::migrations::init_with_migrations;
use crate::libs::config::DbConfig;
use crate::libs::error::{Result, TaskError};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database described by `config` and applies pending migrations.
    pub fn new(config: &DbConfig) -> Result<Db> {
        let mut conn = Self::new_without_migrations(config)?;
        init_with_migrations(&mut conn).map_err(|e| TaskError::Migration(format!("{:#}", e)))?;
        msg_debug!(Message::StoreOpened(config.path.display().to_string()));

        Ok(Db { conn })
    }

    /// Opens the connection only. Used by migration tooling and tests.
    pub fn new_without_migrations(config: &DbConfig) -> Result<Connection> {
        let conn = Connection::open(&config.path)?;
        conn.busy_timeout(config.busy_timeout())?;

        Ok(conn)
    }
}
