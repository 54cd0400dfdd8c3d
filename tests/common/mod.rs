//! Shared helpers: a local stand-in for the upstream and a relay wired to it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use chat_relay::{app, state::AppState, upstream::HttpUpstream};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "sk-relay-test";

/// Start a fake upstream on an ephemeral port.
///
/// - `/echo` returns the request body unchanged
/// - `/status` parses the body as a status code and answers with it
/// - `/headers` reports the Authorization and Content-Type it received
pub async fn start_mock_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/echo", post(echo))
        .route("/status", post(status_from_body))
        .route("/headers", post(echo_headers));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start an upstream that accepts connections and drops them without replying.
pub async fn start_hangup_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });
    addr
}

/// Start an upstream that promises a 100-byte body, sends 5 bytes, then closes.
pub async fn start_truncating_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                // Drain the request first so closing does not reset the connection
                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request.ends_with(b"{}") {
                                break;
                            }
                        }
                    }
                }
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\ncontent-type: application/json\r\n\r\nhello")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

/// Start the relay pointed at `upstream_url` and return its address.
pub async fn start_relay(upstream_url: String) -> SocketAddr {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let state = AppState {
        upstream: Arc::new(HttpUpstream::new(client, upstream_url, TEST_API_KEY)),
    };
    let router = app::build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

async fn echo(body: Bytes) -> Bytes {
    body
}

async fn status_from_body(body: Bytes) -> (StatusCode, Bytes) {
    let code = std::str::from_utf8(&body)
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);
    (code, body)
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let get = |name: &str| {
        headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
    };
    Json(json!({
        "authorization": get("authorization"),
        "content_type": get("content-type"),
    }))
}
