//! Resumable run state: a per-step completion ledger.
//!
//! A partial run can be resumed without re-deriving which steps already
//! succeeded: the orchestrator records each successful step here and skips
//! steps found in the file on the next invocation. The ledger is a plain
//! JSON array of step names so an operator can inspect or edit it.
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::errors::LedgerError;

/// Per-step completion ledger. Disabled (in-memory only, never persisted)
/// unless constructed with a backing path.
#[derive(Debug, Default)]
pub struct RunLedger {
    path: Option<PathBuf>,
    completed: BTreeSet<String>,
}

impl RunLedger {
    /// A ledger that records nothing across runs.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Loads the ledger from `path`; an absent file is an empty ledger.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let completed = if path.exists() {
            let text = fs::read_to_string(&path)?;
            let steps: Vec<String> = serde_json::from_str(&text)?;
            steps.into_iter().collect()
        } else {
            BTreeSet::new()
        };
        Ok(RunLedger {
            path: Some(path),
            completed,
        })
    }

    pub fn is_complete(&self, step: &str) -> bool {
        self.completed.contains(step)
    }

    /// Marks a step complete and persists immediately, so a crash between
    /// steps never loses the checkpoint.
    pub fn mark_complete(&mut self, step: &str) -> Result<(), LedgerError> {
        if !self.completed.insert(step.to_string()) {
            return Ok(());
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), LedgerError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let steps: Vec<&String> = self.completed.iter().collect();
        fs::write(path, serde_json::to_string_pretty(&steps)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_an_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = RunLedger::load(dir.path().join("ledger.json")).unwrap();
        assert!(!ledger.is_complete("users"));
    }

    #[test]
    fn completed_steps_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut ledger = RunLedger::load(&path).unwrap();
        ledger.mark_complete("users").unwrap();
        ledger.mark_complete("brands").unwrap();

        let reloaded = RunLedger::load(&path).unwrap();
        assert!(reloaded.is_complete("users"));
        assert!(reloaded.is_complete("brands"));
        assert!(!reloaded.is_complete("products"));
    }

    #[test]
    fn disabled_ledger_never_touches_disk() {
        let mut ledger = RunLedger::disabled();
        ledger.mark_complete("users").unwrap();
        assert!(ledger.is_complete("users"));
    }

    #[test]
    fn corrupt_ledger_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            RunLedger::load(&path),
            Err(LedgerError::Format(_))
        ));
    }
}
