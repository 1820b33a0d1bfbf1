//! Classification of evaluation results the way consumers read them:
//! Critical violations block, everything else is advisory.

use fmsim_core::{RuleEvaluationResult, Severity};

/// Summary over a batch of evaluation results.
#[derive(Debug, Clone, Default)]
pub struct EvaluationOutcome {
    results: Vec<RuleEvaluationResult>,
}

impl EvaluationOutcome {
    pub fn from_results(results: Vec<RuleEvaluationResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[RuleEvaluationResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<RuleEvaluationResult> {
        self.results
    }

    /// Results whose rule fired
    pub fn violations(&self) -> Vec<&RuleEvaluationResult> {
        self.results.iter().filter(|r| r.violation_detected()).collect()
    }

    /// Fired Critical rules
    pub fn blocking(&self) -> Vec<&RuleEvaluationResult> {
        self.results.iter().filter(|r| r.is_blocking()).collect()
    }

    /// Fired Warning / Info rules
    pub fn advisories(&self) -> Vec<&RuleEvaluationResult> {
        self.results
            .iter()
            .filter(|r| r.violation_detected() && !r.severity.is_blocking())
            .collect()
    }

    pub fn is_blocked(&self) -> bool {
        self.results.iter().any(|r| r.is_blocking())
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn compliant_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Most severe severity among violations, if any fired
    pub fn worst_severity(&self) -> Option<Severity> {
        self.violations()
            .into_iter()
            .map(|r| r.severity)
            .max_by_key(|s| s.rank())
    }
}

impl From<Vec<RuleEvaluationResult>> for EvaluationOutcome {
    fn from(results: Vec<RuleEvaluationResult>) -> Self {
        Self::from_results(results)
    }
}
