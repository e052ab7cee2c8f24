// App state for the Axum server
use std::sync::Arc;

use crate::provider::GenerationProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn GenerationProvider>,
}
