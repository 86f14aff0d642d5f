//! JSON file I/O for bulk import and export.
//!
//! Import files hold a top-level array of [`NewMovie`] objects; export files
//! hold a pretty-printed array of [`Movie`] objects including their ids.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::types::{Movie, NewMovie};

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("JSON format error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load an array of movie records from a JSON file.
///
/// Every element must carry `title`, `director`, `genre`, `year` and
/// `rating`; extra keys are ignored.
pub fn load_movies(path: &Path) -> Result<Vec<NewMovie>, JsonError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => JsonError::NotFound(path.display().to_string()),
        _ => JsonError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })?;
    parse_movies(&contents).map_err(|e| JsonError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse an import document from a string.
pub fn parse_movies(contents: &str) -> Result<Vec<NewMovie>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Write movies to `path` as a pretty-printed JSON array, replacing any
/// existing file.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn save_movies(path: &Path, movies: &[Movie]) -> Result<(), JsonError> {
    let io_err = |source: io::Error| JsonError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut buf = to_pretty_json(movies).map_err(|e| JsonError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = path.with_extension("json.tmp");
    let written = std::fs::write(&tmp, &buf).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    Ok(())
}

/// Serialize with a four-space indent.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
