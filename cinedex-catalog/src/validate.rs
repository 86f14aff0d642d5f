//! Parsing and range checks for console input.

use thiserror::Error;

use crate::types::Column;

/// Lowest allowed rating (inclusive).
pub const RATING_MIN: f64 = 1.0;
/// Highest allowed rating (inclusive).
pub const RATING_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: Column },
    #[error("year '{0}' is not a whole number")]
    InvalidYear(String),
    #[error("rating '{0}' is not a number")]
    InvalidRating(String),
    #[error("rating {0} is outside 1.0 - 10.0")]
    RatingOutOfRange(f64),
}

/// Parse a release year.
pub fn parse_year(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))
}

/// Parse a rating and check it is within range.
pub fn parse_rating(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let rating = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidRating(trimmed.to_string()))?;
    check_rating(rating)
}

/// NaN fails the range check.
pub fn check_rating(rating: f64) -> Result<f64, ValidationError> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

pub(crate) fn require_text(field: Column, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
