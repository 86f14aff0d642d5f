//! Write operations on the `movies` table.
//!
//! Every operation runs inside its own transaction, so a failure part way
//! through leaves the table as it was.

use cinedex_catalog::{FieldValue, Movie, MovieUpdate, NewMovie, ValidationError};
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use thiserror::Error;

use crate::queries::{self, like_pattern};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("No movie title contains '{query}'")]
    NotFound { query: String },
}

const INSERT_MOVIE: &str = "INSERT INTO movies (title, director, genre, year, rating)
     VALUES (?1, ?2, ?3, ?4, ?5)";

// ── Insert ──────────────────────────────────────────────────────────────────

/// Validate and insert a single movie. Returns the stored row.
pub fn add_movie(conn: &Connection, movie: &NewMovie) -> Result<Movie, OperationError> {
    movie.validate()?;

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        INSERT_MOVIE,
        params![
            movie.title,
            movie.director,
            movie.genre,
            movie.year,
            movie.rating,
        ],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    log::debug!("Inserted movie {} '{}'", id, movie.title);
    Ok(Movie {
        id,
        title: movie.title.clone(),
        director: movie.director.clone(),
        genre: movie.genre.clone(),
        year: movie.year,
        rating: movie.rating,
    })
}

/// Insert a batch of movies atomically.
///
/// The rows are not pre-validated: the table constraints decide, and one
/// rejected row rolls back the whole batch.
pub fn insert_movies(conn: &Connection, movies: &[NewMovie]) -> Result<usize, OperationError> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(INSERT_MOVIE)?;
        for movie in movies {
            stmt.execute(params![
                movie.title,
                movie.director,
                movie.genre,
                movie.year,
                movie.rating,
            ])?;
        }
    }
    tx.commit()?;
    Ok(movies.len())
}

// ── Update ──────────────────────────────────────────────────────────────────

/// Apply a partial update to the first movie (lowest id) whose title
/// contains `original_title`.
///
/// An empty `update` changes nothing and returns the matched record.
pub fn modify_movie(
    conn: &Connection,
    original_title: &str,
    update: &MovieUpdate,
) -> Result<Movie, OperationError> {
    update.validate()?;

    let tx = conn.unchecked_transaction()?;
    let Some(mut movie) = queries::find_first_movie(&tx, original_title)? else {
        return Err(OperationError::NotFound {
            query: original_title.to_string(),
        });
    };

    if update.is_empty() {
        log::debug!("Empty update for movie {}; nothing to do", movie.id);
        return Ok(movie);
    }

    let assignments: Vec<String> = update
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{} = ?{}", column.name(), i + 1))
        .collect();
    let sql = format!(
        "UPDATE movies SET {} WHERE id = ?{}",
        assignments.join(", "),
        update.len() + 1
    );

    let mut values: Vec<Value> = update.iter().map(|(_, v)| to_sql_value(v)).collect();
    values.push(Value::Integer(movie.id));

    tx.execute(&sql, params_from_iter(values))?;
    tx.commit()?;

    update.apply_to(&mut movie);
    log::debug!("Updated {} column(s) of movie {}", update.len(), movie.id);
    Ok(movie)
}

fn to_sql_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::Text(s.clone()),
        FieldValue::Integer(n) => Value::Integer(*n),
        FieldValue::Real(r) => Value::Real(*r),
    }
}

// ── Delete ──────────────────────────────────────────────────────────────────

/// Delete every movie (`None`) or those whose title contains the filter.
///
/// Returns the number of rows removed. Callers are responsible for asking
/// the user first.
pub fn delete_movies(conn: &Connection, title: Option<&str>) -> Result<usize, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let deleted = match title {
        Some(t) => tx.execute(
            "DELETE FROM movies WHERE title LIKE ?1 ESCAPE '\\'",
            params![like_pattern(t)],
        )?,
        None => tx.execute("DELETE FROM movies", [])?,
    };
    tx.commit()?;

    log::debug!("Deleted {} movie(s)", deleted);
    Ok(deleted)
}
