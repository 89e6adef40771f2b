//! Health check endpoints
//!
//! `/health` and `/health/live` answer without touching the database;
//! `/health/ready` degrades to 503 when the pool cannot reach it.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness probe; 503 when the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(state.db()).await {
        Ok(()) => {
            let mut response = HealthResponse::new("ready");
            response.database = Some("healthy".to_string());
            Ok(Json(response))
        }
        Err(e) => {
            let mut response = HealthResponse::new("not_ready");
            response.database = Some(e.to_string());
            Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
        }
    }
}

/// Liveness probe; OK whenever the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
        assert!(response.database.is_none());
    }
}
