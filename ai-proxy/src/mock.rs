//! Mock provider with scripted outcomes, for tests and local development.
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::models::{DescriptionRequest, SimilarProductsResponse};
use crate::provider::{GenerationProvider, ProviderError};

/// Scripted [`GenerationProvider`]: answers with pre-configured data, or
/// fails as an unavailable upstream when none was configured. Calls are
/// counted so tests can assert a rejected request never reached it.
#[derive(Debug, Default)]
pub struct MockGenerationProvider {
    description: Option<String>,
    similar: Option<SimilarProductsResponse>,
    calls: AtomicUsize,
}

impl MockGenerationProvider {
    /// A provider that answers every description request with `text`.
    pub fn healthy(text: &str) -> Self {
        MockGenerationProvider {
            description: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// A provider that fails every call as unavailable.
    pub fn down() -> Self {
        Self::default()
    }

    pub fn with_similar(mut self, response: SimilarProductsResponse) -> Self {
        self.similar = Some(response);
        self
    }

    /// Number of calls that reached the provider.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate_description(
        &self,
        _request: &DescriptionRequest,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.description
            .clone()
            .ok_or(ProviderError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }

    async fn similar_products(
        &self,
        _product_id: Uuid,
        _limit: usize,
    ) -> Result<SimilarProductsResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.similar
            .clone()
            .ok_or(ProviderError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }
}
