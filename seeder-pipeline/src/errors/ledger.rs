//! Error types for the run ledger module.
use thiserror::Error;

/// Represents errors that can occur while reading or persisting the
/// per-step completion ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger format error: {0}")]
    Format(#[from] serde_json::Error),
}
