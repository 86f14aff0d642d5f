//! Owned handle over the catalog connection.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::schema::{self, ConnectionError};

/// An open catalog database.
///
/// Created once at startup and passed by reference to every operation.
/// [`MovieStore::close`] releases it explicitly; dropping the handle on any
/// other path closes the connection as well.
#[derive(Debug)]
pub struct MovieStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl MovieStore {
    /// Open (creating if needed) the database file and ensure the schema.
    pub fn open(path: &Path) -> Result<Self, ConnectionError> {
        let conn = schema::open_database(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_memory() -> Result<Self, ConnectionError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<(), ConnectionError> {
        let label = self.describe();
        self.conn.close().map_err(|(_, e)| ConnectionError::Sqlite(e))?;
        log::debug!("Closed catalog database {label}");
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(p) => p.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}
