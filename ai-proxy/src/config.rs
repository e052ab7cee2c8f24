// Configuration constants and environment helpers
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:9090";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Socket address the proxy binds to.
pub fn bind_addr() -> SocketAddr {
    std::env::var("AI_PROXY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("AI_PROXY_ADDR must be a valid socket address")
}

/// Base URL of the upstream generation provider.
pub fn provider_base_url() -> String {
    std::env::var("AI_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string())
}

/// Timeout applied to every upstream provider call.
pub fn provider_timeout() -> Duration {
    let secs = std::env::var("AI_PROVIDER_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Create CORS layer for localhost development
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://localhost:5173".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:5173".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
