//! # Severity Module
//!
//! Severity decides whether a fired rule blocks a user action or only warns.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    /// Blocks the action when the rule fires
    Critical,
    /// Advisory only
    #[default]
    Warning,
    /// Informational; also the marker of a compliant result
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }

    /// Higher rank is more severe.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 2,
            Severity::Warning => 1,
            Severity::Info => 0,
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Critical)
    }

    pub fn all() -> Vec<Severity> {
        vec![Severity::Critical, Severity::Warning, Severity::Info]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(CoreError::UnknownSeverity(s.to_string())),
        }
    }
}
