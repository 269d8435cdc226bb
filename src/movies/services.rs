use super::models::{CreateMovieInput, Movie, MovieUpdate};
use super::validators::MovieValidator;
use crate::common::{ApiError, Validate, Validator};
use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, info, warn};

/// Builds an unsaved movie from request input. The id is assigned by the store.
pub fn build_movie(input: CreateMovieInput, now: DateTime<Utc>) -> Movie {
    Movie {
        id: 0,
        created_at: now,
        title: input.title,
        year: input.year,
        runtime: input.runtime,
        genres: input.genres,
        version: 1,
    }
}

/// Builds and validates a new movie
pub fn create_movie(input: CreateMovieInput, now: DateTime<Utc>) -> Result<Movie, ApiError> {
    let movie = build_movie(input, now);

    ensure_valid(&movie, now.year())?;

    info!(title = %movie.title, year = movie.year, "Movie accepted");
    Ok(movie)
}

/// Applies a partial update, re-validates the merged record and bumps its version.
///
/// The input record is left untouched; the updated copy is returned on success.
pub fn apply_update(
    movie: &Movie,
    update: MovieUpdate,
    expected_version: Option<i32>,
    now: DateTime<Utc>,
) -> Result<Movie, ApiError> {
    if let Some(expected) = expected_version {
        if expected != movie.version {
            warn!(
                id = movie.id,
                expected = expected,
                actual = movie.version,
                "Movie update rejected: version mismatch"
            );
            return Err(ApiError::EditConflict);
        }
    }

    let mut updated = movie.clone();

    if let Some(title) = update.title {
        updated.title = title;
    }
    if let Some(year) = update.year {
        updated.year = year;
    }
    if let Some(runtime) = update.runtime {
        updated.runtime = runtime;
    }
    if let Some(genres) = update.genres {
        updated.genres = Some(genres);
    }

    ensure_valid(&updated, now.year())?;

    updated.version = updated.version.checked_add(1).ok_or_else(|| {
        ApiError::InternalServer(format!("version overflow for movie {}", updated.id))
    })?;
    info!(id = updated.id, version = updated.version, "Movie updated");

    Ok(updated)
}

fn ensure_valid(movie: &Movie, current_year: i32) -> Result<(), ApiError> {
    let mut v = Validator::new();
    MovieValidator::new(current_year).validate(&mut v, movie);

    if !v.valid() {
        debug!(
            fields = ?v.errors().keys().collect::<Vec<_>>(),
            "Movie failed validation"
        );
        return Err(ApiError::from(v));
    }

    Ok(())
}
