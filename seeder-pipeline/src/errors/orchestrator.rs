//! Error types for the orchestrator module.
//! Only authentication is fatal to a run; every other failure is handled at
//! the step or record level.
use storefront_client::ClientError;
use thiserror::Error;

/// Represents errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("authentication failed: {0}")]
    Authentication(#[from] ClientError),
}
