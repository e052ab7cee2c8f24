/// Outcome of a single seeding step.
///
/// `attempted` counts the rows the step looked at, `succeeded` the rows that
/// resulted in a successful creation (or were already present remotely).
/// `ok` is the step-level verdict used by the run summary; a step with some
/// failed rows can still be `ok` as long as at least one row succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub name: &'static str,
    pub attempted: usize,
    pub succeeded: usize,
    pub ok: bool,
    pub skipped: bool,
}

impl StepReport {
    /// A step that ran to completion; `ok` when at least one row succeeded.
    pub fn completed(name: &'static str, attempted: usize, succeeded: usize) -> Self {
        StepReport {
            name,
            attempted,
            succeeded,
            ok: succeeded > 0,
            skipped: false,
        }
    }

    /// A step with nothing to do. Optional kinds report this as success.
    pub fn empty(name: &'static str, ok: bool) -> Self {
        StepReport {
            name,
            attempted: 0,
            succeeded: 0,
            ok,
            skipped: false,
        }
    }

    /// A step that failed before processing any rows (unreadable source).
    pub fn failed(name: &'static str) -> Self {
        StepReport {
            name,
            attempted: 0,
            succeeded: 0,
            ok: false,
            skipped: false,
        }
    }

    /// A step skipped because a prior run's ledger marks it complete.
    pub fn skipped(name: &'static str) -> Self {
        StepReport {
            name,
            attempted: 0,
            succeeded: 0,
            ok: true,
            skipped: true,
        }
    }
}

/// Aggregated result of a full seeding run, one report per attempted step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub steps: Vec<StepReport>,
}

impl RunSummary {
    pub fn push(&mut self, report: StepReport) {
        self.steps.push(report);
    }

    /// The run succeeds only if every attempted step reported success.
    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|step| step.ok)
    }

    pub fn succeeded_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.ok).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_step_requires_at_least_one_success() {
        assert!(StepReport::completed("brands", 3, 1).ok);
        assert!(!StepReport::completed("brands", 3, 0).ok);
    }

    #[test]
    fn summary_fails_when_any_step_fails() {
        let mut summary = RunSummary::default();
        summary.push(StepReport::completed("users", 2, 2));
        summary.push(StepReport::failed("brands"));
        assert!(!summary.is_success());
        assert_eq!(summary.succeeded_steps(), 1);
    }

    #[test]
    fn ledger_skipped_steps_count_as_success() {
        let mut summary = RunSummary::default();
        summary.push(StepReport::skipped("users"));
        assert!(summary.is_success());
    }
}
