//! Health and status handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}

/// Service status response
#[derive(Debug, Serialize)]
pub struct ServiceStatusResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub stats: ServiceStats,
}

/// Service statistics
#[derive(Debug, Serialize)]
pub struct ServiceStats {
    pub total_clients: usize,
}

/// Service status endpoint
pub async fn service_status(
    State(state): State<AppState>,
) -> ApiResult<Json<ServiceStatusResponse>> {
    let clients = state.storage.list_clients().await?;

    Ok(Json(ServiceStatusResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        started_at: state.started_at,
        stats: ServiceStats {
            total_clients: clients.len(),
        },
    }))
}
