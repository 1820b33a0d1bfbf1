//! Registry errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported rule file format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate rule: {0}")]
    DuplicateRule(String),

    #[error("Rule not found: {0}")]
    RuleNotFound(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::RuleNotFound(_))
    }
}
