// src/healthcheck.rs
//! Service health endpoint

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::common::AppState;

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub environment: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub system_info: SystemInfo,
}

/// GET /v1/healthcheck - Report availability and build information
pub async fn healthcheck(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "available".to_string(),
        system_info: SystemInfo {
            environment: state.config.env.clone(),
            version: state.version.to_string(),
        },
    })
}

pub fn healthcheck_routes() -> Router {
    Router::new().route("/v1/healthcheck", get(healthcheck))
}
