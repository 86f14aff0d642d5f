//! Export catalog rows to a JSON file.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::TransferError;

/// Result of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStats {
    pub exported: usize,
    pub path: PathBuf,
}

/// Write all movies, or those whose title contains `title`, to `path`.
///
/// Every column is exported, including `id`. The file is replaced if it
/// exists; an empty selection writes an empty array.
pub fn export_movies(
    conn: &Connection,
    path: &Path,
    title: Option<&str>,
) -> Result<ExportStats, TransferError> {
    let movies = cinedex_db::movies_matching(conn, title)?;
    cinedex_catalog::save_movies(path, &movies)?;
    log::debug!("Exported {} movie(s) to {}", movies.len(), path.display());

    Ok(ExportStats {
        exported: movies.len(),
        path: path.to_path_buf(),
    })
}
