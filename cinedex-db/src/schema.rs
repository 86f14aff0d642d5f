//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// The database could not be opened or initialized.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("cannot open database {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Create the `movies` table if it doesn't exist.
///
/// This is idempotent and runs on every start.
pub fn ensure_schema(conn: &Connection) -> Result<(), ConnectionError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
pub fn open_database(path: &Path) -> Result<Connection, ConnectionError> {
    let open_err = |source| ConnectionError::Open {
        path: path.display().to_string(),
        source,
    };

    let conn = Connection::open(path).map_err(open_err)?;
    // The first real read happens here, so a file that is not a database
    // fails now rather than at the first menu action.
    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .map_err(open_err)?;
    ensure_schema(&conn).map_err(|e| match e {
        ConnectionError::Sqlite(source) => open_err(source),
        other => other,
    })?;

    log::debug!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, ConnectionError> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    director TEXT NOT NULL CHECK (length(trim(director)) > 0),
    genre TEXT NOT NULL CHECK (length(trim(genre)) > 0),
    year INTEGER NOT NULL,
    rating REAL NOT NULL CHECK (rating >= 1.0 AND rating <= 10.0)
);
"#;
