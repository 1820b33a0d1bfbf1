//! Rule inspection commands

use anyhow::{bail, Result};
use fmsim_core::BusinessRule;
use fmsim_registry::{lint_rules, RuleRegistry};

use super::truncate;
use crate::RulesAction;

/// Handle rules subcommands
pub fn handle(registry: &RuleRegistry, action: RulesAction) -> Result<()> {
    match action {
        RulesAction::List { domain, active_only } => list_rules(registry, domain.as_deref(), active_only),
        RulesAction::Show { code } => show_rule(registry, &code)?,
        RulesAction::Lint => lint(registry),
    }
    Ok(())
}

fn select<'a>(registry: &'a RuleRegistry, domain: Option<&str>, active_only: bool) -> Vec<&'a BusinessRule> {
    registry
        .all()
        .iter()
        .filter(|r| domain.map_or(true, |d| r.in_domain(d)))
        .filter(|r| !active_only || r.is_active)
        .collect()
}

fn list_rules(registry: &RuleRegistry, domain: Option<&str>, active_only: bool) {
    let rules = select(registry, domain, active_only);
    if rules.is_empty() {
        println!("No rules found.");
        return;
    }

    println!(
        "{:<8} {:<16} {:<10} {:<8} {:<40}",
        "CODE", "DOMAIN", "SEVERITY", "ACTIVE", "NAME"
    );
    println!("{}", "-".repeat(86));
    for rule in &rules {
        println!(
            "{:<8} {:<16} {:<10} {:<8} {:<40}",
            rule.code,
            truncate(&rule.domain, 16),
            rule.severity,
            if rule.is_active { "yes" } else { "no" },
            truncate(&rule.name, 40)
        );
    }
    println!("\n{} rule(s)", rules.len());
}

fn show_rule(registry: &RuleRegistry, code: &str) -> Result<()> {
    let Some(rule) = registry.get_by_code(code) else {
        bail!("Rule not found: {}", code);
    };

    println!("📋 {} - {}", rule.code, rule.name);
    println!("   ID:          {}", rule.id);
    println!("   Domain:      {}", rule.domain);
    println!("   Severity:    {}", rule.severity);
    println!("   Active:      {}", rule.is_active);
    println!("   Citation:    {}", rule.citation);
    println!("   Description: {}", rule.description);
    println!("   Logic:       {}", rule.logic_string);
    println!("   Conditions:");
    if rule.conditions.is_empty() {
        println!("     (none - fires for every context)");
    }
    for condition in &rule.conditions {
        match &condition.value {
            Some(value) => println!("     {} {} {}", condition.field, condition.operator, value),
            None => println!("     {} {}", condition.field, condition.operator),
        }
    }
    Ok(())
}

fn lint(registry: &RuleRegistry) {
    let issues = lint_rules(registry.all());
    if issues.is_empty() {
        println!("✅ {} rule(s), no issues", registry.len());
        return;
    }
    for issue in &issues {
        println!("⚠️  {}", issue);
    }
    println!("\n{} issue(s) in {} rule(s)", issues.len(), registry.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmsim_registry::default_rules;

    #[test]
    fn test_select_filters() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();

        let labor = select(&registry, Some("labor"), false);
        assert_eq!(labor.len(), 2);
        assert_eq!(select(&registry, Some("labor"), true).len(), 1);
        assert_eq!(select(&registry, None, false).len(), registry.len());
    }

    #[test]
    fn test_show_unknown_rule() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();
        assert!(show_rule(&registry, "NOPE-99").is_err());
        assert!(show_rule(&registry, "ada-01").is_ok());
    }
}
