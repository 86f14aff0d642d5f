//! Movie catalog data model types, input validation, and JSON file I/O.
//!
//! This crate defines the record types without any database dependencies.
//! Consumers can use these types directly for serialization, display, or
//! passing to `cinedex-db` for persistence.

pub mod json;
pub mod types;
pub mod validate;

pub use json::{JsonError, load_movies, parse_movies, save_movies};
pub use types::*;
pub use validate::{RATING_MAX, RATING_MIN, ValidationError, parse_rating, parse_year};
