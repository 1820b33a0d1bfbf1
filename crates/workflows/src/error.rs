//! Workflow layer errors
//!
//! Uses anyhow for error aggregation with custom error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Submission blocked for {subject}: {violations} critical violation(s)")]
    Blocked { subject: String, violations: usize },

    #[error("Context serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for workflow operations
pub type WorkflowResult<T> = anyhow::Result<T>;

impl WorkflowError {
    pub fn blocked(subject: &str, violations: usize) -> Self {
        Self::Blocked {
            subject: subject.to_string(),
            violations,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, WorkflowError::Blocked { .. })
    }
}
