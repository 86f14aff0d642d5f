//! Data model types for the movie catalog.
//!
//! `Movie` is a persisted row, `NewMovie` is a record that has not been
//! assigned an id yet, and `MovieUpdate` describes a partial update.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::{self, ValidationError};

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie as stored in the catalog database.
///
/// Field order matches the export file layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i64,
    pub rating: f64,
}

impl Movie {
    /// The record without its id, e.g. for comparing exported and
    /// re-imported data.
    pub fn without_id(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            director: self.director.clone(),
            genre: self.genre.clone(),
            year: self.year,
            rating: self.rating,
        }
    }
}

/// A movie that has not been persisted yet.
///
/// This is also the element shape of an import file. Unknown keys are
/// ignored when deserializing; missing keys are an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: i64,
    pub rating: f64,
}

impl NewMovie {
    /// Build a record from raw console input.
    ///
    /// `year` must parse as an integer and `rating` as a real number in
    /// [`RATING_MIN`](crate::RATING_MIN)..=[`RATING_MAX`](crate::RATING_MAX).
    pub fn from_input(
        title: &str,
        director: &str,
        genre: &str,
        year: &str,
        rating: &str,
    ) -> Result<Self, ValidationError> {
        let movie = NewMovie {
            title: validate::require_text(Column::Title, title)?,
            director: validate::require_text(Column::Director, director)?,
            genre: validate::require_text(Column::Genre, genre)?,
            year: validate::parse_year(year)?,
            rating: validate::parse_rating(rating)?,
        };
        Ok(movie)
    }

    /// Check an already typed record against the catalog invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::require_text(Column::Title, &self.title)?;
        validate::require_text(Column::Director, &self.director)?;
        validate::require_text(Column::Genre, &self.genre)?;
        validate::check_rating(self.rating)?;
        Ok(())
    }
}

// ── Columns ─────────────────────────────────────────────────────────────────

/// A mutable column of the `movies` table. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Title,
    Director,
    Genre,
    Year,
    Rating,
}

impl Column {
    /// SQL column identifier.
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "title",
            Column::Director => "director",
            Column::Genre => "genre",
            Column::Year => "year",
            Column::Rating => "rating",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value destined for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
}

// ── Partial update ──────────────────────────────────────────────────────────

/// Structured partial update: the set of columns to change and their new
/// values. Columns not present keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    fields: BTreeMap<Column, FieldValue>,
}

impl MovieUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an update from raw console input.
    ///
    /// Empty inputs mean "keep the current value". Year and rating are parsed
    /// and range checked; any failure rejects the whole update.
    pub fn from_input(
        title: &str,
        director: &str,
        genre: &str,
        year: &str,
        rating: &str,
    ) -> Result<Self, ValidationError> {
        let mut update = MovieUpdate::new();
        if !title.is_empty() {
            update = update.title(title);
        }
        if !director.is_empty() {
            update = update.director(director);
        }
        if !genre.is_empty() {
            update = update.genre(genre);
        }
        if !year.is_empty() {
            update = update.year(validate::parse_year(year)?);
        }
        if !rating.is_empty() {
            update = update.rating(validate::parse_rating(rating)?);
        }
        Ok(update)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.set(Column::Title, FieldValue::Text(title.into()))
    }

    pub fn director(self, director: impl Into<String>) -> Self {
        self.set(Column::Director, FieldValue::Text(director.into()))
    }

    pub fn genre(self, genre: impl Into<String>) -> Self {
        self.set(Column::Genre, FieldValue::Text(genre.into()))
    }

    pub fn year(self, year: i64) -> Self {
        self.set(Column::Year, FieldValue::Integer(year))
    }

    /// Set the rating. Range is checked by [`MovieUpdate::validate`] and by
    /// the database constraint.
    pub fn rating(self, rating: f64) -> Self {
        self.set(Column::Rating, FieldValue::Real(rating))
    }

    fn set(mut self, column: Column, value: FieldValue) -> Self {
        self.fields.insert(column, value);
        self
    }

    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, column: Column) -> Option<&FieldValue> {
        self.fields.get(&column)
    }

    /// Columns and values in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &FieldValue)> {
        self.fields.iter().map(|(c, v)| (*c, v))
    }

    /// Check values set through the builder methods.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (column, value) in self.iter() {
            match value {
                FieldValue::Text(s) => {
                    validate::require_text(column, s)?;
                }
                FieldValue::Real(r) if column == Column::Rating => {
                    validate::check_rating(*r)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply this update to an in-memory record.
    pub fn apply_to(&self, movie: &mut Movie) {
        for (column, value) in self.iter() {
            match (column, value) {
                (Column::Title, FieldValue::Text(s)) => movie.title = s.clone(),
                (Column::Director, FieldValue::Text(s)) => movie.director = s.clone(),
                (Column::Genre, FieldValue::Text(s)) => movie.genre = s.clone(),
                (Column::Year, FieldValue::Integer(n)) => movie.year = *n,
                (Column::Rating, FieldValue::Real(r)) => movie.rating = *r,
                _ => {}
            }
        }
    }
}
