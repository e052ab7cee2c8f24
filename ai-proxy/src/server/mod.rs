// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use tracing::info;

use self::state::AppState;
use crate::config::create_cors_layer;

/// Create the Axum application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/ai/health", get(handlers::health))
        .route(
            "/api/ai/generate-description",
            post(handlers::generate_description),
        )
        .route(
            "/api/ai/similar-products/:product_id",
            get(handlers::similar_products),
        )
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("AI proxy listening on {}", addr);
    info!("- Health endpoint: http://{}/api/ai/health", addr);
    info!(
        "- Description endpoint: http://{}/api/ai/generate-description",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
