use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

pub const API_KEY_VAR: &str = "VITE_DEEPSEEK_API_KEY";
pub const DEFAULT_UPSTREAM_URL: &str = "https://tb.api.mkeai.com/v1/chat/completions";

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub upstream_url: String,
    /// `None` keeps the upstream call unbounded.
    pub upstream_timeout: Option<Duration>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .context("VITE_DEEPSEEK_API_KEY environment variable is required")?;

        let upstream_url =
            env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        reqwest::Url::parse(&upstream_url)
            .with_context(|| format!("UPSTREAM_URL is not a valid URL: {}", upstream_url))?;

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .context("UPSTREAM_TIMEOUT_SECS must be a positive number of seconds")?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            api_key,
            upstream_url,
            upstream_timeout,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API key: configured ({} chars)", self.api_key.len());
        tracing::info!("  Upstream: {}", self.upstream_url);
        match self.upstream_timeout {
            Some(timeout) => tracing::info!("  Upstream timeout: {}s", timeout.as_secs()),
            None => tracing::info!("  Upstream timeout: none"),
        }
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("upstream_url", &self.upstream_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("service_port", &self.service_port)
            .field("service_host", &self.service_host)
            .finish()
    }
}
