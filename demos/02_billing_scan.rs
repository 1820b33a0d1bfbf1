//! # Demo 02: Billing Scan
//!
//! Scans reimbursable billings against the full registry and prints the
//! findings as Markdown.
//!
//! Run with: `cargo run -p fmsim-demos --example 02_billing_scan`

use fmsim_registry::{default_rules, RuleRegistry};
use fmsim_reports::{MarkdownExporter, ReportExporter, ScanFindingsReport};
use fmsim_workflows::{AgreementDocuments, ComplianceScanner, ReimbursableBilling, ScanRecord};
use rust_decimal_macros::dec;

fn main() {
    println!("=== Demo 02: Billing Scan ===\n");

    let registry = match RuleRegistry::with_rules(default_rules()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Invalid rule catalog: {}", e);
            return;
        }
    };

    let signed = AgreementDocuments { fs7600a: true, fs7600b: true };
    let billings = vec![
        ReimbursableBilling::new("BL-0101", "FEMA", dec!(182000)).pending_for(12).with_documents(signed.clone()),
        ReimbursableBilling::new("BL-0102", "EPA", dec!(64500.25)).pending_for(47).with_documents(signed.clone()),
        ReimbursableBilling::new("BL-0103", "DHS", dec!(9800)).pending_for(3).advance(),
        ReimbursableBilling::new("BL-0104", "NOAA", dec!(230000)).pending_for(91).advance().with_documents(signed),
    ];

    let records: Vec<ScanRecord> = billings
        .iter()
        .filter_map(|billing| match ScanRecord::from_subject(billing) {
            Ok(record) => Some(record),
            Err(e) => {
                eprintln!("Skipping {}: {}", billing.id, e);
                None
            }
        })
        .collect();

    let scan = ComplianceScanner::new(&registry)
        .with_domain("Reimbursables")
        .scan("Quarterly Reimbursable Billing Scan", &records);

    println!("{}\n", scan.summary_text());
    println!("{}", MarkdownExporter::new().export(&ScanFindingsReport::new(&scan)));

    println!("=== Demo Complete ===");
}
