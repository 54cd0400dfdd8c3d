use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

/// /api/chat handler - Relay a chat-completion request upstream
///
/// OPTIONS is answered locally with an empty 200. Every other method has its
/// body forwarded byte-for-byte as a POST carrying the server's credential;
/// the upstream status and body come back unchanged. CORS headers are added
/// by the layer wrapping this route.
#[utoipa::path(
    post,
    path = routes::CHAT,
    request_body(
        content = serde_json::Value,
        content_type = "application/json",
        description = "Chat-completion payload, forwarded without parsing"
    ),
    responses(
        (status = 200, description = "Upstream response, status passed through", body = serde_json::Value),
        (status = 400, description = "Request body could not be read", body = String, content_type = "text/plain"),
        (status = 500, description = "Upstream request could not be built or its response read", body = String, content_type = "text/plain"),
        (status = 502, description = "Upstream unreachable", body = String, content_type = "text/plain")
    ),
    tag = "chat"
)]
pub async fn relay_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let method = request.method().clone();
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to read request body: {}", e);
            ApiError::BadRequest
        })?;

    tracing::info!("Relaying {} request upstream ({} bytes)", method, body.len());

    let upstream = state.upstream.forward(body).await.map_err(|e| {
        tracing::error!("Upstream call failed: {}", e);
        ApiError::from(e)
    })?;

    tracing::info!(
        "Upstream returned {} ({} bytes)",
        upstream.status,
        upstream.body.len()
    );

    Ok((
        upstream.status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}
