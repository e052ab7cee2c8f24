//! Request and response envelopes for the proxy endpoints.
//!
//! Field names mirror the storefront's JSON contract (camelCase); the
//! cross-field rules live in [`DescriptionRequest::validate`] so a bad
//! request is rejected before the provider is ever called.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Writing style requested for a generated description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Technical,
    Marketing,
}

/// Variant details included with a description request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantPayload {
    pub attribute_values: BTreeMap<String, String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// Payload for generating or improving a product description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptionRequest {
    pub product_id: Option<Uuid>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub existing_description: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub has_variants: bool,
    pub variants: Vec<VariantPayload>,
    pub target_audience: Option<String>,
    pub tone: Tone,
    pub max_length: u32,
}

impl Default for DescriptionRequest {
    fn default() -> Self {
        DescriptionRequest {
            product_id: None,
            product_name: None,
            category: None,
            brand: None,
            existing_description: None,
            attributes: BTreeMap::new(),
            has_variants: false,
            variants: Vec::new(),
            target_audience: None,
            tone: Tone::default(),
            max_length: 150,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RequestError {
    #[error("either productId or productName is required")]
    MissingProductReference,
    #[error("variants are required when hasVariants is true")]
    VariantsRequired,
    #[error("maxLength must be between 1 and 1000, got {0}")]
    MaxLengthOutOfRange(u32),
}

impl DescriptionRequest {
    /// Normalizes the payload and checks its cross-field rules.
    ///
    /// A non-empty variant list implies `hasVariants`; `hasVariants` without
    /// variants is an error, as is a request naming neither a product id
    /// nor a product name.
    pub fn validate(&mut self) -> Result<(), RequestError> {
        let name_missing = self
            .product_name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty());
        if self.product_id.is_none() && name_missing {
            return Err(RequestError::MissingProductReference);
        }

        if !self.variants.is_empty() {
            self.has_variants = true;
        }
        if self.has_variants && self.variants.is_empty() {
            return Err(RequestError::VariantsRequired);
        }

        if !(1..=1000).contains(&self.max_length) {
            return Err(RequestError::MaxLengthOutOfRange(self.max_length));
        }
        Ok(())
    }
}

/// Standard response envelope for description generation.
///
/// Provider failure is data, not an HTTP error: the endpoint answers 200
/// with `success: false` and an `errorMessage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionResponse {
    pub generated_description: Option<String>,
    pub original_description: Option<String>,
    pub tone: Option<Tone>,
    pub word_count: u32,
    pub generated_at: DateTime<Utc>,
    pub success: bool,
    pub error_message: Option<String>,
}

impl DescriptionResponse {
    pub fn succeeded(request: &DescriptionRequest, generated: String) -> Self {
        let word_count = generated.split_whitespace().count() as u32;
        DescriptionResponse {
            generated_description: Some(generated),
            original_description: request.existing_description.clone(),
            tone: Some(request.tone),
            word_count,
            generated_at: Utc::now(),
            success: true,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        DescriptionResponse {
            generated_description: None,
            original_description: None,
            tone: None,
            word_count: 0,
            generated_at: Utc::now(),
            success: false,
            error_message: Some(message.into()),
        }
    }
}

/// Response envelope for the similar-products lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarProductsResponse {
    pub success: bool,
    pub message: Option<String>,
    pub source_product_id: Option<Uuid>,
    pub source_product_name: Option<String>,
    pub similar_products: Vec<Value>,
    pub total_found: Option<u64>,
}

impl Default for SimilarProductsResponse {
    fn default() -> Self {
        SimilarProductsResponse {
            success: true,
            message: None,
            source_product_id: None,
            source_product_name: None,
            similar_products: Vec::new(),
            total_found: None,
        }
    }
}
