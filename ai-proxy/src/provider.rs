//! Upstream generation provider access.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{DescriptionRequest, SimilarProductsResponse};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(StatusCode),
}

/// Trait for reaching the external generation provider.
///
/// This trait abstracts the provider to enable dependency injection and
/// mocking for testing. Production code uses [`HttpGenerationProvider`],
/// while tests use [`MockGenerationProvider`](crate::MockGenerationProvider)
/// with scripted outcomes.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate a product description for the validated request.
    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<String, ProviderError>;

    /// Look up products similar to `product_id`, at most `limit` of them.
    async fn similar_products(
        &self,
        product_id: Uuid,
        limit: usize,
    ) -> Result<SimilarProductsResponse, ProviderError>;
}

/// Production provider client that forwards over HTTP.
pub struct HttpGenerationProvider {
    base_url: String,
    client: ReqwestClient,
}

impl HttpGenerationProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(HttpGenerationProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Completion {
    description: String,
}

#[async_trait]
impl GenerationProvider for HttpGenerationProvider {
    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/descriptions", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }
        let completion: Completion = response.json().await?;
        Ok(completion.description)
    }

    async fn similar_products(
        &self,
        product_id: Uuid,
        limit: usize,
    ) -> Result<SimilarProductsResponse, ProviderError> {
        let url = format!("{}/v1/similar-products/{}", self.base_url, product_id);
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }
        Ok(response.json().await?)
    }
}
