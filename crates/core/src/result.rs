//! # Result Module
//!
//! Outcome of evaluating one rule against one context.

use crate::rule::BusinessRule;
use crate::severity::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Message of a result whose rule did not fire
pub const COMPLIANT_MESSAGE: &str = "Compliant";

/// Result of one rule evaluation.
///
/// `passed == false` means the rule fired, i.e. a violation was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEvaluationResult {
    pub rule_id: String,
    pub rule_name: String,
    pub passed: bool,
    pub severity: Severity,
    pub message: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

fn serialize_iso_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl RuleEvaluationResult {
    /// Result for a rule whose conditions all matched
    pub fn fired(rule: &BusinessRule, at: DateTime<Utc>) -> Self {
        Self {
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            passed: false,
            severity: rule.severity,
            message: rule.violation_message(),
            timestamp: at,
        }
    }

    /// Result for a rule that did not fire
    pub fn compliant(rule: &BusinessRule, at: DateTime<Utc>) -> Self {
        Self {
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            passed: true,
            severity: Severity::Info,
            message: COMPLIANT_MESSAGE.to_string(),
            timestamp: at,
        }
    }

    pub fn violation_detected(&self) -> bool {
        !self.passed
    }

    pub fn is_blocking(&self) -> bool {
        self.violation_detected() && self.severity.is_blocking()
    }

    /// ISO 8601 form used on the wire
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
