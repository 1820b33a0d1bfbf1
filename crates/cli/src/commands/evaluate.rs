//! Evaluate command

use anyhow::{Context, Result};
use fmsim_engine::evaluate_rules;
use fmsim_registry::RuleRegistry;
use fmsim_reports::EvaluationReport;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::{emit, render};
use crate::OutputFormat;

/// Evaluate the rule set against a context file. Returns whether a
/// Critical rule fired.
pub fn run(
    registry: &RuleRegistry,
    context_path: &Path,
    domain: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<bool> {
    let content = fs::read_to_string(context_path)
        .with_context(|| format!("Failed to read context {:?}", context_path))?;
    let context: Value = serde_json::from_str(&content).context("Context is not valid JSON")?;

    let rules = match domain {
        Some(domain) => registry.active_in_domain(domain),
        None => registry.active(),
    };
    if rules.is_empty() {
        tracing::warn!("No active rules selected; nothing to evaluate");
    }

    let title = format!("Compliance Evaluation: {}", context_path.display());
    let report = EvaluationReport::new(&title, evaluate_rules(&rules, &context));
    emit(&render(&report, format), output)?;

    Ok(report.outcome.is_blocked())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmsim_registry::default_rules;
    use std::io::Write;

    fn context_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_blocked_context() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();
        let file = context_file(r#"{ "amount": 1500000 }"#);
        let out = tempfile::tempdir().unwrap();

        let blocked = run(
            &registry,
            file.path(),
            Some("Transfers"),
            OutputFormat::Json,
            Some(&out.path().join("report.json")),
        )
        .unwrap();
        assert!(blocked);
    }

    #[test]
    fn test_compliant_context() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();
        let file = context_file(r#"{ "amount": 500000, "justification": "ok" }"#);
        let out = tempfile::tempdir().unwrap();

        let blocked = run(
            &registry,
            file.path(),
            Some("Transfers"),
            OutputFormat::Csv,
            Some(&out.path().join("report.csv")),
        )
        .unwrap();
        assert!(!blocked);
    }

    #[test]
    fn test_invalid_context() {
        let registry = RuleRegistry::new();
        let file = context_file("not json");
        assert!(run(&registry, file.path(), None, OutputFormat::Table, None).is_err());
    }
}
