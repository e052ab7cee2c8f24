mod ledger;
mod orchestrator;
mod source;

pub use ledger::LedgerError;
pub use orchestrator::OrchestratorError;
pub use source::SourceError;
