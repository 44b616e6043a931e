//! Ordered per-suite record of passed steps.

use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub step: String,
    pub detail: String,
}

/// Ordered record of the steps a suite completed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub suite: &'static str,
    pub steps: Vec<StepRecord>,
}

impl VerificationReport {
    pub fn new(suite: &'static str) -> Self {
        Self {
            suite,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, step: impl Into<String>, detail: impl Into<String>) {
        let record = StepRecord {
            step: step.into(),
            detail: detail.into(),
        };
        info!(suite = self.suite, step = %record.step, detail = %record.detail, "step passed");
        self.steps.push(record);
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
