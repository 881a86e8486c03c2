//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub records: RecordCounts,
}

/// Number of records held by each directory.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordCounts {
    pub countries: usize,
    pub persons: usize,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - reports directory sizes.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service.service_name.clone(),
        records: RecordCounts {
            countries: state.countries.count(),
            persons: state.persons.count(),
        },
    })
}
