use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "chat-relay API",
        version = "1.0.0",
        description = "Relays chat-completion requests to a fixed upstream with a server-side credential"
    ),
    paths(
        handlers::relay::relay_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "chat", description = "Chat-completion relay"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
