//! Compliance report data for the exporters.

use crate::exporters::ReportData;
use chrono::{DateTime, SecondsFormat, Utc};
use fmsim_core::RuleEvaluationResult;
use fmsim_engine::EvaluationOutcome;
use fmsim_workflows::ScanReport;

fn status(result: &RuleEvaluationResult) -> &'static str {
    if result.passed {
        "PASS"
    } else {
        "VIOLATION"
    }
}

// ============================================================================
// Single-context evaluation
// ============================================================================

/// Every result of one evaluation
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub title: String,
    pub outcome: EvaluationOutcome,
    pub generated_at: DateTime<Utc>,
}

impl EvaluationReport {
    pub fn new(title: &str, results: Vec<RuleEvaluationResult>) -> Self {
        Self {
            title: title.to_string(),
            outcome: EvaluationOutcome::from_results(results),
            generated_at: Utc::now(),
        }
    }

    pub fn decision(&self) -> &'static str {
        if self.outcome.is_blocked() {
            "Blocked"
        } else if self.outcome.is_clean() {
            "Compliant"
        } else {
            "Advisory"
        }
    }
}

impl ReportData for EvaluationReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        ["Rule ID", "Rule", "Status", "Severity", "Message", "Timestamp"]
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.outcome
            .results()
            .iter()
            .map(|r| {
                vec![
                    r.rule_id.clone(),
                    r.rule_name.clone(),
                    status(r).to_string(),
                    r.severity.to_string(),
                    r.message.clone(),
                    r.timestamp_iso(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Rules Evaluated".to_string(), self.outcome.total().to_string()),
            ("Violations".to_string(), self.outcome.violations().len().to_string()),
            ("Blocking".to_string(), self.outcome.blocking().len().to_string()),
            ("Decision".to_string(), self.decision().to_string()),
            (
                "Generated At".to_string(),
                self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ]
    }
}

// ============================================================================
// Scan findings
// ============================================================================

/// Violations found by a compliance scan
pub struct ScanFindingsReport<'a> {
    scan: &'a ScanReport,
}

impl<'a> ScanFindingsReport<'a> {
    pub fn new(scan: &'a ScanReport) -> Self {
        Self { scan }
    }
}

impl ReportData for ScanFindingsReport<'_> {
    fn title(&self) -> &str {
        &self.scan.title
    }

    fn headers(&self) -> Vec<String> {
        ["Record", "Rule Code", "Rule", "Severity", "Message"]
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.scan
            .violations()
            .into_iter()
            .map(|(record_id, r)| {
                vec![
                    record_id.to_string(),
                    self.scan.code_for(&r.rule_id).to_string(),
                    r.rule_name.clone(),
                    r.severity.to_string(),
                    r.message.clone(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        let mut summary = vec![
            (
                "Scope".to_string(),
                self.scan.domain.clone().unwrap_or_else(|| "All domains".to_string()),
            ),
            ("Rules Evaluated".to_string(), self.scan.rules_evaluated.to_string()),
            ("Records Scanned".to_string(), self.scan.total_records().to_string()),
            ("Clean Records".to_string(), self.scan.clean_records().to_string()),
            ("Blocked Records".to_string(), self.scan.blocked_records().to_string()),
            ("Violations".to_string(), self.scan.total_violations().to_string()),
        ];
        for (code, count) in self.scan.violations_by_code() {
            summary.push((format!("Violations {}", code), count.to_string()));
        }
        summary.push((
            "Generated At".to_string(),
            self.scan.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::{CsvExporter, MarkdownExporter, ReportExporter};
    use fmsim_engine::evaluate_rules;
    use fmsim_registry::{default_rules, RuleRegistry};
    use fmsim_workflows::{ComplianceScanner, ScanRecord};
    use serde_json::json;

    #[test]
    fn test_evaluation_report_rows() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();
        let rules = registry.active_in_domain("Transfers");
        let results = evaluate_rules(&rules, &json!({ "amount": 2000000, "justification": "x" }));

        let report = EvaluationReport::new("Transfer TR-1", results);
        assert_eq!(report.rows().len(), rules.len());
        assert_eq!(report.decision(), "Blocked");
        assert_eq!(report.rows()[0][2], "VIOLATION");

        let csv = CsvExporter::new().export(&report);
        assert!(csv.starts_with("Rule ID,Rule,Status,Severity,Message,Timestamp\n"));
    }

    #[test]
    fn test_scan_findings_report() {
        let registry = RuleRegistry::with_rules(default_rules()).unwrap();
        let records = vec![
            ScanRecord::new("BL-1", "FEMA", json!({ "invoiceDaysPending": 45 })),
            ScanRecord::new("BL-2", "EPA", json!({ "documents": { "fs7600a": true } })),
        ];
        let scan = ComplianceScanner::new(&registry)
            .with_domain("Reimbursables")
            .scan("Billing Scan", &records);

        let report = ScanFindingsReport::new(&scan);
        let rows = report.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r[0] == "BL-1"));
        assert!(rows.iter().any(|r| r[1] == "BIL-03"));

        let md = MarkdownExporter::new().export(&report);
        assert!(md.contains("- **Blocked Records**: 1"));
        assert!(md.contains("- **Violations BIL-01**: 1"));
    }
}
