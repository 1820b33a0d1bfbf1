//! # Error Module
//!
//! Domain errors for parsing and validating rule definitions.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownOperator("BETWEEN".to_string());
        assert_eq!(err.to_string(), "Unknown operator: BETWEEN");

        let err = CoreError::UnknownSeverity("Fatal".to_string());
        assert_eq!(err.to_string(), "Unknown severity: Fatal");
    }
}
