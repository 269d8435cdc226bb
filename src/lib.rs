// src/lib.rs

pub mod common;
pub mod healthcheck;
pub mod movies;

use axum::{extract::DefaultBodyLimit, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use common::AppState;

/// Builds the application router with all routes and layers
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .merge(healthcheck::healthcheck_routes())
        .merge(movies::movies_routes())
        .method_not_allowed_fallback(common::error::method_not_allowed)
        .fallback(common::error::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
}
