//! Rule lint.
//!
//! Flags definitions that evaluate legally but almost certainly do not
//! mean what their author intended. Nothing here rejects a rule.

use fmsim_core::BusinessRule;
use fmsim_engine::coerce::to_number;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// No conditions: the rule fires for every context
    EmptyConditions,
    /// Binary operator without a comparand
    MissingComparand { field: String, operator: String },
    /// GREATER_THAN / LESS_THAN against a comparand that coerces to NaN
    NonNumericThreshold { field: String },
    EmptyField { index: usize },
    DuplicateCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleIssue {
    pub rule_id: String,
    pub rule_code: String,
    pub kind: IssueKind,
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match &self.kind {
            IssueKind::EmptyConditions => "no conditions; rule fires for every context".to_string(),
            IssueKind::MissingComparand { field, operator } => {
                format!("{} on '{}' has no value", operator, field)
            }
            IssueKind::NonNumericThreshold { field } => {
                format!("threshold on '{}' is not numeric; comparison never matches", field)
            }
            IssueKind::EmptyField { index } => format!("condition #{} has an empty field", index),
            IssueKind::DuplicateCode => "code is used by more than one rule".to_string(),
        };
        write!(f, "[{}] {}", self.rule_code, detail)
    }
}

/// Inspect rules and report every issue found, in rule order.
pub fn lint_rules(rules: &[BusinessRule]) -> Vec<RuleIssue> {
    let mut code_counts: HashMap<String, usize> = HashMap::new();
    for rule in rules {
        *code_counts.entry(rule.code.to_lowercase()).or_insert(0) += 1;
    }

    let mut issues = Vec::new();
    for rule in rules {
        let issue = |kind| RuleIssue {
            rule_id: rule.id.clone(),
            rule_code: rule.code.clone(),
            kind,
        };

        if code_counts.get(&rule.code.to_lowercase()).copied().unwrap_or(0) > 1 {
            issues.push(issue(IssueKind::DuplicateCode));
        }
        if rule.conditions.is_empty() {
            issues.push(issue(IssueKind::EmptyConditions));
        }

        for (index, condition) in rule.conditions.iter().enumerate() {
            if condition.field.trim().is_empty() {
                issues.push(issue(IssueKind::EmptyField { index }));
            }
            if !condition.operator.is_unary() && condition.value.is_none() {
                issues.push(issue(IssueKind::MissingComparand {
                    field: condition.field.clone(),
                    operator: condition.operator.to_string(),
                }));
            } else if condition.operator.is_magnitude()
                && to_number(condition.value.as_ref()).is_nan()
            {
                issues.push(issue(IssueKind::NonNumericThreshold {
                    field: condition.field.clone(),
                }));
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmsim_core::{Operator, RuleCondition, Severity};
    use serde_json::json;

    fn rule(code: &str) -> BusinessRule {
        BusinessRule::new(code, code, code, "Financial", Severity::Warning)
    }

    #[test]
    fn test_clean_rule() {
        let rules = vec![rule("A-01").when(RuleCondition::greater_than("amount", 10))];
        assert!(lint_rules(&rules).is_empty());
    }

    #[test]
    fn test_empty_conditions_flagged() {
        let issues = lint_rules(&[rule("A-01")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::EmptyConditions);
        assert!(issues[0].to_string().starts_with("[A-01]"));
    }

    #[test]
    fn test_condition_issues() {
        let rules = vec![rule("A-01")
            .when(RuleCondition::unary("amount", Operator::GreaterThan))
            .when(RuleCondition::less_than("days", json!("soon")))
            .when(RuleCondition::equals(" ", 1))
            .when(RuleCondition::is_true("flag"))];

        let kinds: Vec<IssueKind> = lint_rules(&rules).into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingComparand {
                    field: "amount".to_string(),
                    operator: "GREATER_THAN".to_string()
                },
                IssueKind::NonNumericThreshold { field: "days".to_string() },
                IssueKind::EmptyField { index: 2 },
            ]
        );
    }

    #[test]
    fn test_duplicate_codes() {
        let rules = vec![
            rule("A-01").when(RuleCondition::is_true("x")),
            rule("a-01").when(RuleCondition::is_true("y")),
        ];
        let issues = lint_rules(&rules);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.kind == IssueKind::DuplicateCode));
    }
}
