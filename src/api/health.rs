//! Service info and health check endpoints

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::UserId;

use super::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: HealthStatus,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub app_name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Result of probing one dependency
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub latency_ms: u64,
}

/// GET /
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(RootResponse {
        message: format!("{} is running", state.app_name),
        version: state.version.clone(),
        status: HealthStatus::Healthy,
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        app_name: state.app_name.clone(),
        version: state.version.clone(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// GET /health/ready
///
/// Probes the user repository with a point lookup; 503 if it fails.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let repository_check = check_user_repository(&state).await;
    let status = repository_check.status;

    let response = HealthResponse {
        status,
        app_name: state.app_name.clone(),
        version: state.version.clone(),
        checks: Some(vec![repository_check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// GET /health/live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_user_repository(state: &AppState) -> HealthCheck {
    let start = Instant::now();

    let (status, message) = match state.user_repository.find_by_id(&UserId::generate()).await {
        Ok(_) => (HealthStatus::Healthy, None),
        Err(e) => {
            tracing::warn!(error = %e, "User repository readiness probe failed");
            (HealthStatus::Unhealthy, Some(e.message().to_string()))
        }
    };

    HealthCheck {
        name: "user_repository".to_string(),
        status,
        message,
        latency_ms: start.elapsed().as_millis() as u64,
    }
}
