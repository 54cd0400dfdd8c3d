use axum::{
    http::{Method, StatusCode, Uri},
    routing::{any, get},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::cors;
use crate::handlers;
use crate::models::ErrorResponse;
use crate::routes;
use crate::state::AppState;

/// Build the full application router.
///
/// Only the relay route carries CORS headers; health and docs are plain.
pub fn build_router(state: AppState) -> Router {
    let relay = cors::with_cors_headers(
        Router::new().route(routes::CHAT, any(handlers::relay_handler)),
    );

    Router::new()
        .merge(relay)
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            message: format!("Cannot {} {}", method, uri.path()),
        }),
    )
}
