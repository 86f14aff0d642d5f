//! Bulk transfer of movie records between the catalog database and JSON
//! files.
//!
//! Imports are all-or-nothing: the whole file is parsed before anything is
//! written, and every row goes into a single transaction.

pub mod export;
pub mod import;

use cinedex_catalog::JsonError;
use cinedex_db::OperationError;
use thiserror::Error;

pub use export::{ExportStats, export_movies};
pub use import::{ImportStats, import_movies};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("JSON file not found: {0}")]
    FileNotFound(String),
    #[error("JSON format error in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
}

impl From<JsonError> for TransferError {
    fn from(e: JsonError) -> Self {
        match e {
            JsonError::NotFound(path) => TransferError::FileNotFound(path),
            JsonError::Io { path, source } => TransferError::Io { path, source },
            JsonError::Parse { path, source } => TransferError::Parse {
                path,
                message: source.to_string(),
            },
        }
    }
}
