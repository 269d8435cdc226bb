use super::models::{CreateMovieInput, MovieEnvelope};
use super::services;
use crate::common::ApiError;
use axum::{
    extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json,
};
use chrono::Utc;
use tracing::debug;

// ============================================================================
// Movie Handlers
// ============================================================================

/// POST /v1/movies - Validate a new movie and echo it back
pub async fn create_movie(
    payload: Result<Json<CreateMovieInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected movie payload");
        ApiError::BadRequest(rejection.body_text())
    })?;

    let movie = services::create_movie(input, Utc::now())?;

    Ok((StatusCode::CREATED, Json(MovieEnvelope { movie })))
}
