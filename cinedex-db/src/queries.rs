//! Read queries for the catalog database.
//!
//! Title filters are literal "contains" matches: `%`, `_` and `\` in the
//! user's text are escaped before being bound into a `LIKE` pattern.
//! Case folding follows SQLite's default `LIKE` (ASCII only).

use cinedex_catalog::Movie;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::operations::OperationError;

const SELECT_MOVIE: &str = "SELECT id, title, director, genre, year, rating FROM movies";

// ── Title lookups ───────────────────────────────────────────────────────────

/// All movies whose title contains `title`, in id order.
pub fn search_movies(conn: &Connection, title: &str) -> Result<Vec<Movie>, OperationError> {
    movies_matching(conn, Some(title))
}

/// All movies, in id order.
pub fn list_movies(conn: &Connection) -> Result<Vec<Movie>, OperationError> {
    movies_matching(conn, None)
}

/// All movies, or only those whose title contains `filter`.
pub fn movies_matching(
    conn: &Connection,
    filter: Option<&str>,
) -> Result<Vec<Movie>, OperationError> {
    match filter {
        Some(title) => {
            let mut stmt = conn.prepare(&format!(
                "{SELECT_MOVIE} WHERE title LIKE ?1 ESCAPE '\\' ORDER BY id"
            ))?;
            let rows = stmt.query_map(params![like_pattern(title)], row_to_movie)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
        None => {
            let mut stmt = conn.prepare(&format!("{SELECT_MOVIE} ORDER BY id"))?;
            let rows = stmt.query_map([], row_to_movie)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
    }
}

/// The first movie (lowest id) whose title contains `title`.
pub fn find_first_movie(conn: &Connection, title: &str) -> Result<Option<Movie>, OperationError> {
    conn.query_row(
        &format!("{SELECT_MOVIE} WHERE title LIKE ?1 ESCAPE '\\' ORDER BY id LIMIT 1"),
        params![like_pattern(title)],
        row_to_movie,
    )
    .optional()
    .map_err(Into::into)
}

/// Look up a movie by id.
pub fn find_movie(conn: &Connection, id: i64) -> Result<Option<Movie>, OperationError> {
    conn.query_row(
        &format!("{SELECT_MOVIE} WHERE id = ?1"),
        params![id],
        row_to_movie,
    )
    .optional()
    .map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Number of movies in the catalog.
pub fn count_movies(conn: &Connection) -> Result<i64, OperationError> {
    let count = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
    Ok(count)
}

// ── Row mapping ─────────────────────────────────────────────────────────────

fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get("id")?,
        title: row.get("title")?,
        director: row.get("director")?,
        genre: row.get("genre")?,
        year: row.get("year")?,
        rating: row.get("rating")?,
    })
}

/// `%text%` with LIKE metacharacters escaped by `\`.
pub(crate) fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
