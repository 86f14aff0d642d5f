//! Import a JSON array of movies into the catalog database.

use std::path::Path;

use rusqlite::Connection;

use crate::TransferError;

/// Statistics from a single import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// Records found in the file.
    pub read: usize,
    /// Rows committed to the database.
    pub inserted: usize,
}

/// Import every record in `path` in one transaction.
///
/// Fails with [`TransferError::FileNotFound`] when the file is absent and
/// [`TransferError::Parse`] when it is not an array of movie objects. If the
/// database rejects any row (e.g. a rating outside 1.0 - 10.0) nothing from
/// the file is committed.
pub fn import_movies(conn: &Connection, path: &Path) -> Result<ImportStats, TransferError> {
    let movies = cinedex_catalog::load_movies(path)?;
    let read = movies.len();
    log::debug!("Read {} record(s) from {}", read, path.display());

    let inserted = cinedex_db::insert_movies(conn, &movies)?;
    log::debug!("Committed {} record(s) from {}", inserted, path.display());

    Ok(ImportStats { read, inserted })
}
