// src/movies/validators.rs

use super::models::Movie;
use crate::common::{unique, Validate, Validator};
use chrono::{Datelike, Utc};

pub const MAX_TITLE_BYTES: usize = 500;
pub const EARLIEST_YEAR: i32 = 1888;
pub const MAX_GENRES: usize = 5;

// ============================================================================
// Movie Validator
// ============================================================================

/// Movie rules, pinned to a calendar year for the "not in the future" check
pub struct MovieValidator {
    current_year: i32,
}

impl MovieValidator {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn for_current_year() -> Self {
        Self::new(Utc::now().year())
    }
}

impl Validate<Movie> for MovieValidator {
    // Checks on the same field must stay in this order: the first failure wins.
    fn validate(&self, v: &mut Validator, movie: &Movie) {
        v.check(!movie.title.is_empty(), "title", "must be provided");
        v.check(
            movie.title.len() <= MAX_TITLE_BYTES,
            "title",
            "must not be more than 500 bytes long",
        );

        v.check(movie.year != 0, "year", "must be provided");
        v.check(movie.year >= EARLIEST_YEAR, "year", "must be greater than 1888");
        v.check(
            movie.year <= self.current_year,
            "year",
            "must not be in the future",
        );

        v.check(!movie.runtime.is_zero(), "runtime", "must be provided");
        v.check(
            movie.runtime.minutes() > 0,
            "runtime",
            "must be a positive integer",
        );

        let genres = movie.genres.as_deref();
        v.check(genres.is_some(), "genres", "must be provided");
        let genres = genres.unwrap_or_default();
        v.check(!genres.is_empty(), "genres", "must contain at least 1 genre");
        v.check(
            genres.len() <= MAX_GENRES,
            "genres",
            "must not contain more than 5 genres",
        );
        v.check(unique(genres), "genres", "must not contain duplicate values");
    }
}

/// Validates a movie against the current calendar year
pub fn validate_movie(v: &mut Validator, movie: &Movie) {
    MovieValidator::for_current_year().validate(v, movie);
}
