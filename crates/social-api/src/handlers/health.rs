//! Health check handler

use axum::Json;
use social_service::HealthResponse;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
