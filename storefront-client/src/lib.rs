//! HTTP client wrapper for the e-commerce backend.
//!
//! This crate provides:
//! - [`StorefrontApi`] trait for abstracting backend access
//! - [`StorefrontClient`] production client that issues rate-limited,
//!   authenticated requests over reqwest
//! - [`DryRunClient`] client that performs zero network calls and hands out
//!   deterministic synthesized identifiers
//! - [`envelope`] decoder for the backend's response-wrapping conventions
//!
//! Every request is preceded by a fixed delay (simple client-side rate
//! limiting). Soft failures (non-2xx status, transport error, malformed
//! body) are logged and surfaced as `None` so callers can skip the record
//! and continue.
//!
//! ```ignore
//! use storefront_client::{StorefrontApi, StorefrontClient};
//! use std::time::Duration;
//!
//! let client = StorefrontClient::new(
//!     "http://localhost:8080",
//!     "admin",
//!     "password",
//!     Duration::from_millis(200),
//! )?;
//! client.authenticate().await?;
//! let brands = client.get("/api/brands", &[("page".into(), "0".into())]).await;
//! ```

pub mod envelope;
mod dry_run;

pub use dry_run::DryRunClient;
pub use envelope::EnvelopeError;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
pub use reqwest::Method;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("reqwest error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("login failed with status {0}")]
    LoginStatus(StatusCode),
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),
}

/// Trait for issuing requests against the backend.
///
/// This trait abstracts the HTTP session to enable dependency injection:
/// production code uses [`StorefrontClient`], dry runs use [`DryRunClient`],
/// and tests use scripted implementations that record calls.
///
/// `request` returns the parsed response body, or `None` on any soft
/// failure. Callers treat `None` as "skip this record"; nothing at this
/// layer aborts a run.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Establish the session's authentication state.
    ///
    /// This is the only fatal operation in the system: a non-2xx login or a
    /// transport failure aborts the whole run.
    async fn authenticate(&self) -> Result<(), ClientError>;

    /// Issue one request and return the parsed body, or `None` on soft
    /// failure.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: Option<&[(String, String)]>,
    ) -> Option<Value>;

    async fn get(&self, path: &str, params: &[(String, String)]) -> Option<Value> {
        self.request(Method::GET, path, None, Some(params)).await
    }

    async fn post(&self, path: &str, body: &Value) -> Option<Value> {
        self.request(Method::POST, path, Some(body), None).await
    }

    async fn put(&self, path: &str, body: &Value) -> Option<Value> {
        self.request(Method::PUT, path, Some(body), None).await
    }

    async fn delete(&self, path: &str) -> Option<Value> {
        self.request(Method::DELETE, path, None, None).await
    }
}

/// Authentication state attached to every request after session setup.
#[derive(Debug, Clone)]
enum AuthScheme {
    Anonymous,
    Bearer(String),
    Basic,
}

/// Production client for the backend REST API.
///
/// Holds a reqwest client with a fixed network timeout, the configured base
/// URL, the inter-request delay, and the authentication state established by
/// [`StorefrontApi::authenticate`].
pub struct StorefrontClient {
    base_url: String,
    credentials: (String, String),
    delay: Duration,
    http: reqwest::Client,
    auth: RwLock<AuthScheme>,
}

impl StorefrontClient {
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
        delay: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(StorefrontClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: (username.to_string(), password.to_string()),
            delay,
            http,
            auth: RwLock::new(AuthScheme::Anonymous),
        })
    }

    fn auth_scheme(&self) -> AuthScheme {
        self.auth
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(AuthScheme::Anonymous)
    }

    fn set_auth(&self, scheme: AuthScheme) {
        if let Ok(mut guard) = self.auth.write() {
            *guard = scheme;
        }
    }
}

/// Extracts a bearer token from the known login response shapes, in priority
/// order: `token`, `data.token`, `accessToken`, `access_token`.
pub fn extract_token(body: &Value) -> Option<String> {
    let candidates = [
        body.get("token"),
        body.get("data").and_then(|data| data.get("token")),
        body.get("accessToken"),
        body.get("access_token"),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(|token| token.as_str())
        .map(str::to_owned)
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn authenticate(&self) -> Result<(), ClientError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let (username, password) = &self.credentials;
        let payload = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.http.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::LoginStatus(status));
        }

        match response.json::<Value>().await.ok().as_ref().and_then(extract_token) {
            Some(token) => {
                info!("authenticated with bearer token ({} chars)", token.len());
                self.set_auth(AuthScheme::Bearer(token));
            }
            None => {
                warn!("login succeeded but no token found, using basic credentials");
                self.set_auth(AuthScheme::Basic);
            }
        }
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        params: Option<&[(String, String)]>,
    ) -> Option<Value> {
        tokio::time::sleep(self.delay).await;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        match self.auth_scheme() {
            AuthScheme::Bearer(token) => request = request.bearer_auth(token),
            AuthScheme::Basic => {
                let (username, password) = &self.credentials;
                request = request.basic_auth(username, Some(password));
            }
            AuthScheme::Anonymous => {}
        }
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("request error: {} {} - {}", method, url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("request failed: {} {} - status {}: {}", method, url, status, text);
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("failed to read response body: {} {} - {}", method, url, e);
                return None;
            }
        };
        if bytes.is_empty() {
            return Some(Value::Object(serde_json::Map::new()));
        }
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("malformed response body: {} {} - {}", method, url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_extraction_priority_order() {
        let body = json!({"token": "top", "accessToken": "camel"});
        assert_eq!(extract_token(&body), Some("top".to_string()));

        let body = json!({"data": {"token": "nested"}, "access_token": "snake"});
        assert_eq!(extract_token(&body), Some("nested".to_string()));

        let body = json!({"accessToken": "camel"});
        assert_eq!(extract_token(&body), Some("camel".to_string()));

        let body = json!({"access_token": "snake"});
        assert_eq!(extract_token(&body), Some("snake".to_string()));
    }

    #[test]
    fn token_extraction_misses_return_none() {
        assert_eq!(extract_token(&json!({"user": "admin"})), None);
        assert_eq!(extract_token(&json!({"token": 42})), None);
    }

    #[test]
    fn base_url_is_normalized() {
        let client = StorefrontClient::new(
            "http://localhost:8080/",
            "admin",
            "password",
            Duration::from_millis(0),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
