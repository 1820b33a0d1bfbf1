//! Full-registry compliance scan.
//!
//! Evaluates every active rule (optionally one domain) against every
//! record and aggregates the findings.

use crate::error::WorkflowResult;
use crate::forms::ComplianceSubject;
use chrono::{DateTime, Utc};
use fmsim_core::{BusinessRule, RuleEvaluationResult};
use fmsim_engine::{evaluate_rules_at, EvaluationOutcome};
use fmsim_registry::RuleRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// One record to scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub context: Value,
}

impl ScanRecord {
    pub fn new(id: &str, label: &str, context: Value) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            context,
        }
    }

    pub fn from_subject<S: ComplianceSubject>(subject: &S) -> WorkflowResult<Self> {
        Ok(Self::new(subject.subject_id(), subject.domain(), subject.to_context()?))
    }
}

/// Results for one scanned record
#[derive(Debug, Clone)]
pub struct RecordFindings {
    pub record_id: String,
    pub label: String,
    pub outcome: EvaluationOutcome,
}

/// Aggregated scan output
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub domain: Option<String>,
    pub rules_evaluated: usize,
    pub records: Vec<RecordFindings>,
    /// rule id -> rule code
    rule_codes: HashMap<String, String>,
}

impl ScanReport {
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn total_violations(&self) -> usize {
        self.records.iter().map(|r| r.outcome.violations().len()).sum()
    }

    pub fn blocked_records(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_blocked()).count()
    }

    pub fn clean_records(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_clean()).count()
    }

    /// Rule code for a rule id, or the id itself when the rule is unknown
    pub fn code_for<'a>(&'a self, rule_id: &'a str) -> &'a str {
        self.rule_codes.get(rule_id).map(String::as_str).unwrap_or(rule_id)
    }

    /// Violation count per rule code, sorted by code
    pub fn violations_by_code(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, result) in self.violations() {
            *counts.entry(self.code_for(&result.rule_id).to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Every violation with the id of the record it was found on
    pub fn violations(&self) -> Vec<(&str, &RuleEvaluationResult)> {
        self.records
            .iter()
            .flat_map(|record| {
                record
                    .outcome
                    .violations()
                    .into_iter()
                    .map(move |result| (record.record_id.as_str(), result))
            })
            .collect()
    }

    pub fn summary_text(&self) -> String {
        let scope = self.domain.as_deref().unwrap_or("all domains");
        format!(
            "{}\n  Scope: {}\n  Rules evaluated: {}\n  Records scanned: {}\n  Clean records: {}\n  Blocked records: {}\n  Violations: {}",
            self.title,
            scope,
            self.rules_evaluated,
            self.total_records(),
            self.clean_records(),
            self.blocked_records(),
            self.total_violations()
        )
    }
}

/// Scanner over a registry
pub struct ComplianceScanner<'a> {
    registry: &'a RuleRegistry,
    domain: Option<String>,
}

impl<'a> ComplianceScanner<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry, domain: None }
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = Some(domain.to_string());
        self
    }

    fn rules(&self) -> Vec<BusinessRule> {
        match &self.domain {
            Some(domain) => self.registry.active_in_domain(domain),
            None => self.registry.active(),
        }
    }

    pub fn scan(&self, title: &str, records: &[ScanRecord]) -> ScanReport {
        let rules = self.rules();
        let generated_at = Utc::now();

        let findings: Vec<RecordFindings> = records
            .iter()
            .map(|record| RecordFindings {
                record_id: record.id.clone(),
                label: record.label.clone(),
                outcome: EvaluationOutcome::from_results(evaluate_rules_at(
                    &rules,
                    &record.context,
                    generated_at,
                )),
            })
            .collect();

        let report = ScanReport {
            title: title.to_string(),
            generated_at,
            domain: self.domain.clone(),
            rules_evaluated: rules.len(),
            records: findings,
            rule_codes: rules.iter().map(|r| (r.id.clone(), r.code.clone())).collect(),
        };

        tracing::info!(
            records = report.total_records(),
            rules = report.rules_evaluated,
            violations = report.total_violations(),
            blocked = report.blocked_records(),
            "Compliance scan complete"
        );
        report
    }
}
