use std::error::Error as StdError;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::config::Config;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Status and raw body returned by the upstream, neither inspected nor altered.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Failure stages of a single upstream round trip.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The outbound request could not be assembled
    #[error("failed to build upstream request: {0}")]
    Build(#[source] BoxError),
    /// Connect, DNS, TLS or timeout failure before a response arrived
    #[error("upstream request failed: {0}")]
    Transport(#[source] BoxError),
    /// The response started but its body could not be read to the end
    #[error("failed to read upstream response: {0}")]
    Body(#[source] BoxError),
}

/// Outbound side of the relay.
///
/// Handlers only see this trait, so a transport with different connection
/// or timeout behaviour can be swapped in without touching them.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, body: Bytes) -> Result<UpstreamResponse, UpstreamError>;
}

/// Forwards to a single fixed URL over HTTP(S) with a bearer credential.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpUpstream {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build the production transport.
    ///
    /// No timeout is applied unless `upstream_timeout` is set, so a hung
    /// upstream holds its request open indefinitely.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to create upstream HTTP client")?;

        Ok(Self::new(client, &config.upstream_url, &config.api_key))
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn forward(&self, body: Bytes) -> Result<UpstreamResponse, UpstreamError> {
        let request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .body(body)
            .build()
            .map_err(|err| UpstreamError::Build(err.into()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| UpstreamError::Transport(err.into()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| UpstreamError::Body(err.into()))?;

        tracing::debug!("Upstream responded with {} ({} bytes)", status, body.len());
        Ok(UpstreamResponse { status, body })
    }
}
