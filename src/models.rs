use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "chat-relay";

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// RFC 3339 timestamp of when the probe was answered
    pub timestamp: String,
}

/// Body returned for unknown routes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
