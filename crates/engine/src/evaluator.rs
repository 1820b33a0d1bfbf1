//! Evaluate business rules against a context.

use crate::coerce::{strict_equals, to_boolean, to_js_string, to_number};
use crate::path::resolve_path;
use chrono::{DateTime, Utc};
use fmsim_core::{BusinessRule, Operator, RuleCondition, RuleEvaluationResult};
use serde_json::Value;

/// Evaluate one condition against the context.
pub fn condition_matches(condition: &RuleCondition, context: &Value) -> bool {
    let actual = resolve_path(context, &condition.field);
    let expected = condition.value.as_ref();

    match condition.operator {
        Operator::Equals => strict_equals(actual, expected),
        Operator::NotEquals => !strict_equals(actual, expected),
        // NaN on either side makes both comparisons false
        Operator::GreaterThan => to_number(actual) > to_number(expected),
        Operator::LessThan => to_number(actual) < to_number(expected),
        Operator::Contains => to_js_string(actual).contains(&to_js_string(expected)),
        Operator::NotContains => !to_js_string(actual).contains(&to_js_string(expected)),
        Operator::IsTrue => to_boolean(actual),
        Operator::IsFalse => !to_boolean(actual),
    }
}

/// True when every condition of the rule matches.
///
/// All conditions are evaluated even after one fails. A rule without
/// conditions fires for any context.
pub fn rule_fires(rule: &BusinessRule, context: &Value) -> bool {
    rule.conditions
        .iter()
        .map(|condition| condition_matches(condition, context))
        .fold(true, |all, matched| all & matched)
}

/// Evaluate a single rule. `None` for an inactive rule.
pub fn evaluate_rule(
    rule: &BusinessRule,
    context: &Value,
    at: DateTime<Utc>,
) -> Option<RuleEvaluationResult> {
    if !rule.is_active {
        return None;
    }

    if rule_fires(rule, context) {
        tracing::debug!(
            rule_id = %rule.id,
            code = %rule.code,
            severity = %rule.severity,
            "Rule fired"
        );
        Some(RuleEvaluationResult::fired(rule, at))
    } else {
        Some(RuleEvaluationResult::compliant(rule, at))
    }
}

/// Evaluate rules with an explicit evaluation time.
pub fn evaluate_rules_at(
    rules: &[BusinessRule],
    context: &Value,
    at: DateTime<Utc>,
) -> Vec<RuleEvaluationResult> {
    rules
        .iter()
        .filter_map(|rule| evaluate_rule(rule, context, at))
        .collect()
}

/// Evaluate rules against a context, one result per active rule in input order.
pub fn evaluate_rules(rules: &[BusinessRule], context: &Value) -> Vec<RuleEvaluationResult> {
    evaluate_rules_at(rules, context, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmsim_core::{Severity, COMPLIANT_MESSAGE};
    use serde_json::json;

    fn rule(id: &str, severity: Severity) -> BusinessRule {
        BusinessRule::new(id, &format!("R-{}", id), &format!("Rule {}", id), "Financial", severity)
            .with_description("Violation detected")
            .with_citation("DoD FMR")
    }

    fn leaf(field: &str, operator: Operator, value: Value) -> RuleCondition {
        RuleCondition {
            field: field.to_string(),
            operator,
            value: Some(value),
        }
    }

    #[test]
    fn test_large_amount_fires() {
        let rules = vec![rule("1", Severity::Critical).when(RuleCondition::greater_than("amount", 1_000_000))];

        let results = evaluate_rules(&rules, &json!({ "amount": 1_500_000 }));
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].severity, Severity::Critical);
        assert_eq!(results[0].message, "Violation detected (Ref: DoD FMR)");
    }

    #[test]
    fn test_small_amount_compliant() {
        let rules = vec![rule("1", Severity::Critical).when(RuleCondition::greater_than("amount", 1_000_000))];

        let results = evaluate_rules(&rules, &json!({ "amount": 500_000 }));
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert_eq!(results[0].severity, Severity::Info);
        assert_eq!(results[0].message, COMPLIANT_MESSAGE);
    }

    #[test]
    fn test_inactive_rule_skipped() {
        let rules = vec![rule("1", Severity::Critical)
            .when(RuleCondition::greater_than("amount", 0))
            .inactive()];

        assert!(evaluate_rules(&rules, &json!({ "amount": 5 })).is_empty());
        assert!(evaluate_rules(&rules, &json!({})).is_empty());
    }

    #[test]
    fn test_invoice_days_pending() {
        let rules = vec![rule("1", Severity::Warning).when(RuleCondition::greater_than("invoiceDaysPending", 30))];

        let results = evaluate_rules(&rules, &json!({ "invoiceDaysPending": 45 }));
        assert!(!results[0].passed);
        assert_eq!(results[0].severity, Severity::Warning);
    }

    #[test]
    fn test_advance_billing_is_true() {
        let rules = vec![rule("1", Severity::Warning).when(RuleCondition::is_true("isAdvanceBilling"))];

        assert!(!evaluate_rules(&rules, &json!({ "isAdvanceBilling": true }))[0].passed);
        assert!(evaluate_rules(&rules, &json!({ "isAdvanceBilling": false }))[0].passed);
        assert!(evaluate_rules(&rules, &json!({}))[0].passed);
    }

    #[test]
    fn test_empty_conditions_fire_vacuously() {
        // Preserved behavior: a rule with no conditions always reports a violation
        let rules = vec![rule("1", Severity::Critical)];

        for ctx in [json!({}), json!({ "amount": 1 }), json!(null)] {
            let results = evaluate_rules(&rules, &ctx);
            assert_eq!(results.len(), 1);
            assert!(!results[0].passed);
        }
    }

    #[test]
    fn test_cardinality_and_order() {
        let rules = vec![
            rule("a", Severity::Info).when(RuleCondition::is_true("x")),
            rule("b", Severity::Info).inactive(),
            rule("c", Severity::Info).when(RuleCondition::is_false("x")),
            rule("d", Severity::Info).inactive(),
            rule("e", Severity::Info),
        ];

        let results = evaluate_rules(&rules, &json!({ "x": true }));
        let ids: Vec<&str> = results.iter().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_all_conditions_required() {
        let rules = vec![rule("1", Severity::Critical)
            .when(RuleCondition::greater_than("amount", 100))
            .when(RuleCondition::equals("fundType", "O&M"))];

        assert!(!evaluate_rules(&rules, &json!({ "amount": 200, "fundType": "O&M" }))[0].passed);
        assert!(evaluate_rules(&rules, &json!({ "amount": 200, "fundType": "MILCON" }))[0].passed);
        assert!(evaluate_rules(&rules, &json!({ "amount": 50, "fundType": "O&M" }))[0].passed);
    }

    #[test]
    fn test_numeric_coercion_nan_never_matches() {
        let gt = leaf("amount", Operator::GreaterThan, json!(10));
        let lt = leaf("amount", Operator::LessThan, json!(10));

        for ctx in [json!({}), json!({ "amount": "n/a" }), json!({ "amount": {} })] {
            assert!(!condition_matches(&gt, &ctx));
            assert!(!condition_matches(&lt, &ctx));
        }

        // Non-numeric comparand
        let bad = leaf("amount", Operator::GreaterThan, json!("lots"));
        assert!(!condition_matches(&bad, &json!({ "amount": 1e9 })));
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let gt = leaf("amount", Operator::GreaterThan, json!("1000000"));
        assert!(condition_matches(&gt, &json!({ "amount": "1500000.00" })));
        assert!(!condition_matches(&gt, &json!({ "amount": "999999.99" })));
    }

    #[test]
    fn test_equals_is_strict() {
        let eq = leaf("status", Operator::Equals, json!("Open"));
        assert!(condition_matches(&eq, &json!({ "status": "Open" })));
        assert!(!condition_matches(&eq, &json!({ "status": "open" })));
        assert!(!condition_matches(&eq, &json!({})));

        let eq_num = leaf("fy", Operator::Equals, json!(2026));
        assert!(!condition_matches(&eq_num, &json!({ "fy": "2026" })));

        let ne = leaf("status", Operator::NotEquals, json!("Open"));
        assert!(condition_matches(&ne, &json!({ "status": "Closed" })));
        assert!(condition_matches(&ne, &json!({})));
    }

    #[test]
    fn test_contains_coerces_to_string() {
        let contains = leaf("remarks", Operator::Contains, json!("urgent"));
        assert!(condition_matches(&contains, &json!({ "remarks": "urgent: FY26 funds" })));
        assert!(!condition_matches(&contains, &json!({ "remarks": "routine" })));
        assert!(!condition_matches(&contains, &json!({})));

        let numeric = leaf("appropriation", Operator::Contains, json!(21));
        assert!(condition_matches(&numeric, &json!({ "appropriation": 2120 })));

        let not_contains = leaf("remarks", Operator::NotContains, json!("approved"));
        assert!(condition_matches(&not_contains, &json!({ "remarks": "pending" })));
        assert!(!condition_matches(&not_contains, &json!({ "remarks": "approved by RM" })));
    }

    #[test]
    fn test_nested_document_check() {
        let missing_doc = leaf("documents.fs7600a", Operator::IsFalse, Value::Null);
        assert!(condition_matches(&missing_doc, &json!({ "documents": { "fs7600a": false } })));
        assert!(condition_matches(&missing_doc, &json!({ "documents": {} })));
        assert!(condition_matches(&missing_doc, &json!({})));
        assert!(!condition_matches(&missing_doc, &json!({ "documents": { "fs7600a": "signed" } })));
    }

    #[test]
    fn test_unary_ignores_comparand() {
        let cond = leaf("flag", Operator::IsTrue, json!(false));
        assert!(condition_matches(&cond, &json!({ "flag": 1 })));
    }

    #[test]
    fn test_timestamp_propagates() {
        let at = chrono::DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let rules = vec![rule("1", Severity::Info), rule("2", Severity::Info)];

        let results = evaluate_rules_at(&rules, &json!({}), at);
        assert!(results.iter().all(|r| r.timestamp == at));
    }

    #[test]
    fn test_evaluate_rule_single() {
        let at = Utc::now();
        let active = rule("1", Severity::Warning).when(RuleCondition::is_true("x"));
        assert!(evaluate_rule(&active, &json!({ "x": true }), at).is_some());
        assert!(evaluate_rule(&active.clone().inactive(), &json!({ "x": true }), at).is_none());
    }
}
