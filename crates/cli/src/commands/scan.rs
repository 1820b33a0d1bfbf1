//! Scan command

use anyhow::{Context, Result};
use fmsim_registry::RuleRegistry;
use fmsim_reports::ScanFindingsReport;
use fmsim_workflows::{ComplianceScanner, ScanRecord};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{emit, render};
use crate::OutputFormat;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Wrapped { records: Vec<ScanRecord> },
    Bare(Vec<ScanRecord>),
}

fn read_records(path: &Path) -> Result<Vec<ScanRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read records {:?}", path))?;
    let doc: RecordsDocument =
        serde_json::from_str(&content).context("Records file must hold a list of { id, context }")?;
    Ok(match doc {
        RecordsDocument::Wrapped { records } | RecordsDocument::Bare(records) => records,
    })
}

/// Scan every record. Returns whether any record is blocked.
pub fn run(
    registry: &RuleRegistry,
    records_path: &Path,
    domain: Option<&str>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<bool> {
    let records = read_records(records_path)?;

    let mut scanner = ComplianceScanner::new(registry);
    if let Some(domain) = domain {
        scanner = scanner.with_domain(domain);
    }

    let title = format!("Compliance Scan: {}", records_path.display());
    let scan = scanner.scan(&title, &records);
    emit(&render(&ScanFindingsReport::new(&scan), format), output)?;

    Ok(scan.blocked_records() > 0)
}
