use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health - Health check endpoint
///
/// The server holds no external dependencies, so a running process is a
/// healthy process.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /healthz - Liveness probe
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes_status() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }
}
