//! # Rule Module
//!
//! Declarative compliance rules. A rule describes a *failure* condition:
//! when all of its conditions match, a violation has been detected.

use crate::operator::Operator;
use crate::severity::Severity;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One atomic test between a context field and a literal comparand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCondition {
    /// Dot-separated path into the context, e.g. `documents.fs7600a`
    pub field: String,
    pub operator: Operator,
    /// Comparand. `None` means the comparand is absent (JS `undefined`),
    /// which is distinct from an explicit JSON `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RuleCondition {
    pub fn new(field: &str, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: Some(value.into()),
        }
    }

    /// Condition without a comparand (IS_TRUE / IS_FALSE)
    pub fn unary(field: &str, operator: Operator) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: None,
        }
    }

    pub fn equals(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::Equals, value)
    }

    pub fn not_equals(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::NotEquals, value)
    }

    pub fn greater_than(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::GreaterThan, value)
    }

    pub fn less_than(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::LessThan, value)
    }

    pub fn contains(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::Contains, value)
    }

    pub fn not_contains(field: &str, value: impl Into<Value>) -> Self {
        Self::new(field, Operator::NotContains, value)
    }

    pub fn is_true(field: &str) -> Self {
        Self::unary(field, Operator::IsTrue)
    }

    pub fn is_false(field: &str) -> Self {
        Self::unary(field, Operator::IsFalse)
    }

    /// Path segments of `field`
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.field.split('.')
    }
}

/// A declarative compliance rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRule {
    #[serde(default)]
    pub id: String,
    /// Human-facing citation key, e.g. "ADA-01"
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Functional area, e.g. "Financial", "Transfers"
    pub domain: String,
    #[serde(default)]
    pub severity: Severity,
    /// Human-readable intent. Never executed.
    #[serde(default)]
    pub logic_string: String,
    #[serde(default)]
    pub citation: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Combined with implicit AND
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
}

fn default_active() -> bool {
    true
}

impl BusinessRule {
    pub fn new(id: &str, code: &str, name: &str, domain: &str, severity: Severity) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: String::new(),
            domain: domain.to_string(),
            severity,
            logic_string: String::new(),
            citation: String::new(),
            is_active: true,
            conditions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_citation(mut self, citation: &str) -> Self {
        self.citation = citation.to_string();
        self
    }

    pub fn with_logic(mut self, logic: &str) -> Self {
        self.logic_string = logic.to_string();
        self
    }

    pub fn when(mut self, condition: RuleCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Message reported when this rule fires
    pub fn violation_message(&self) -> String {
        format!("{} (Ref: {})", self.description, self.citation)
    }

    pub fn in_domain(&self, domain: &str) -> bool {
        self.domain.eq_ignore_ascii_case(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_builder() {
        let rule = BusinessRule::new("r1", "ADA-01", "Large Reprogramming", "Financial", Severity::Critical)
            .with_description("Reprogramming exceeds threshold")
            .with_citation("31 U.S.C. 1341")
            .when(RuleCondition::greater_than("amount", 1_000_000));

        assert_eq!(rule.conditions.len(), 1);
        assert!(rule.is_active);
        assert_eq!(
            rule.violation_message(),
            "Reprogramming exceeds threshold (Ref: 31 U.S.C. 1341)"
        );
    }

    #[test]
    fn test_rule_deserialize_camel_case() {
        let rule: BusinessRule = serde_json::from_value(json!({
            "id": "r2",
            "code": "BIL-01",
            "name": "Late Billing",
            "domain": "Reimbursables",
            "severity": "Warning",
            "logicString": "invoiceDaysPending > 30",
            "citation": "DoD FMR Vol 11A",
            "isActive": false,
            "conditions": [
                { "field": "invoiceDaysPending", "operator": "GREATER_THAN", "value": 30 }
            ]
        }))
        .unwrap();

        assert!(!rule.is_active);
        assert_eq!(rule.logic_string, "invoiceDaysPending > 30");
        assert_eq!(rule.conditions[0].operator, Operator::GreaterThan);
        assert_eq!(rule.conditions[0].value, Some(json!(30)));
    }

    #[test]
    fn test_rule_defaults() {
        let rule: BusinessRule = serde_json::from_value(json!({
            "code": "X-01",
            "name": "Minimal",
            "domain": "Financial"
        }))
        .unwrap();

        assert!(rule.id.is_empty());
        assert!(rule.is_active);
        assert_eq!(rule.severity, Severity::Warning);
        assert!(rule.conditions.is_empty());
    }

    #[test]
    fn test_condition_null_vs_absent() {
        let absent: RuleCondition =
            serde_json::from_value(json!({ "field": "a", "operator": "IS_TRUE" })).unwrap();
        assert_eq!(absent.value, None);

        let null: RuleCondition =
            serde_json::from_value(json!({ "field": "a", "operator": "EQUALS", "value": null }))
                .unwrap();
        assert_eq!(null.value, Some(Value::Null));
    }

    #[test]
    fn test_condition_path() {
        let cond = RuleCondition::is_true("documents.fs7600a");
        assert_eq!(cond.path().collect::<Vec<_>>(), vec!["documents", "fs7600a"]);
    }
}
