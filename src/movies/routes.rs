use super::handlers;
use axum::{routing::post, Router};

/// Creates the movies router
pub fn movies_routes() -> Router {
    Router::new().route("/v1/movies", post(handlers::create_movie))
}
