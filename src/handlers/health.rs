use crate::models::{HealthResponse, SERVICE_NAME};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness probe
///
/// Answers locally without contacting the upstream.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}
