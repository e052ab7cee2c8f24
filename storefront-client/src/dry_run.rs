//! Dry-run client: full control flow, zero network calls.
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::info;

use crate::{ClientError, StorefrontApi};

/// Client used by `--dry-run` mode.
///
/// Writes return a parseable body carrying a deterministic synthesized
/// identifier (`dry-000001`, `dry-000002`, ...) so that dependent steps can
/// still resolve through the registry; reads return an empty page so the
/// hydrator sees a pristine remote. Nothing touches the network.
#[derive(Debug, Default)]
pub struct DryRunClient {
    counter: AtomicU64,
}

impl DryRunClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("dry-{n:06}")
    }
}

#[async_trait]
impl StorefrontApi for DryRunClient {
    async fn authenticate(&self) -> Result<(), ClientError> {
        info!("[dry-run] skipping login");
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        _body: Option<&Value>,
        _params: Option<&[(String, String)]>,
    ) -> Option<Value> {
        if method == Method::GET {
            Some(json!({"content": []}))
        } else if method == Method::POST || method == Method::PUT {
            let id = self.next_id();
            info!("[dry-run] {} {} -> {}", method, path, id);
            Some(json!({"id": id}))
        } else {
            Some(Value::Object(serde_json::Map::new()))
        }
    }
}
