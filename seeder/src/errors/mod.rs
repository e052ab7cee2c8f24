//! Error types for the seeder binary.
//! Consolidates errors from the client, ledger, and orchestrator into the
//! single error surfaced at process exit.
#[derive(Debug, thiserror::Error)]
pub enum SeedingError {
    #[error("client error: {0}")]
    Client(#[from] storefront_client::ClientError),
    #[error("ledger error: {0}")]
    Ledger(#[from] seeder_pipeline::errors::LedgerError),
    #[error("orchestrator error: {0}")]
    Orchestrator(#[from] seeder_pipeline::errors::OrchestratorError),
}
