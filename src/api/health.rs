//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{config::BackendMode, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Whether data comes from the REST backend or local memory
    pub mode: BackendMode,
    pub authenticated: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: state.config.api.mode,
        authenticated: state.session.is_authenticated(),
    })
}
