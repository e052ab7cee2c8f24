// HTTP request handlers
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::{DescriptionRequest, DescriptionResponse};
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Generate or improve a product description.
///
/// Validation failures answer 422 without touching the provider; a provider
/// failure answers 200 with a failure envelope, per the storefront contract.
pub async fn generate_description(
    State(state): State<AppState>,
    Json(mut payload): Json<DescriptionRequest>,
) -> Response {
    if let Err(e) = payload.validate() {
        info!("rejected description request: {}", e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": e.to_string()})),
        )
            .into_response();
    }

    match state.provider.generate_description(&payload).await {
        Ok(text) => {
            (StatusCode::OK, Json(DescriptionResponse::succeeded(&payload, text))).into_response()
        }
        Err(e) => {
            error!("description provider failed: {}", e);
            (
                StatusCode::OK,
                Json(DescriptionResponse::failed(format!(
                    "description generation failed: {e}"
                ))),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SimilarProductsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Find products similar to the given one.
///
/// An unavailable provider maps to 503 with a descriptive message.
pub async fn similar_products(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Query(query): Query<SimilarProductsQuery>,
) -> Response {
    let limit = query.limit.clamp(1, 20);

    match state.provider.similar_products(product_id, limit).await {
        Ok(result) if result.success => (StatusCode::OK, Json(result)).into_response(),
        Ok(result) => {
            let detail = result
                .message
                .unwrap_or_else(|| "Service unavailable".to_string());
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": detail})),
            )
                .into_response()
        }
        Err(e) => {
            error!("similar products provider failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "detail": format!("similar products service unavailable: {e}")
                })),
            )
                .into_response()
        }
    }
}
