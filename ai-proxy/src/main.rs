use std::sync::Arc;

use ai_proxy::config;
use ai_proxy::provider::HttpGenerationProvider;
use ai_proxy::server::state::AppState;
use ai_proxy::server::{create_app, run_server};
use dotenv::dotenv;

/// Main entry point for the AI proxy.
///
/// Builds the upstream provider from the environment and serves the proxy
/// endpoints until the process is stopped.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    let provider =
        HttpGenerationProvider::new(&config::provider_base_url(), config::provider_timeout())?;
    let state = AppState {
        provider: Arc::new(provider),
    };

    let app = create_app(state);
    run_server(app, config::bind_addr()).await
}
