use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::upstream::UpstreamError;

/// Custom error type for the relay endpoint
///
/// Every variant becomes a plain-text response. Callers get the failure
/// description verbatim; there is no structured body and no retry hint.
#[derive(Debug)]
pub enum ApiError {
    /// Inbound body could not be read
    BadRequest,
    /// Outbound request could not be constructed
    RequestBuild(String),
    /// Upstream unreachable at the transport level
    BadGateway(String),
    /// Upstream response body could not be read
    UpstreamBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::RequestBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest => "Bad request".to_string(),
            ApiError::RequestBuild(msg)
            | ApiError::BadGateway(msg)
            | ApiError::UpstreamBody(msg) => msg,
        };

        (status, message).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        let message = err.to_string();
        match err {
            UpstreamError::Build(_) => ApiError::RequestBuild(message),
            UpstreamError::Transport(_) => ApiError::BadGateway(message),
            UpstreamError::Body(_) => ApiError::UpstreamBody(message),
        }
    }
}
