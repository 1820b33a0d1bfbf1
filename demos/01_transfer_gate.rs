//! # Demo 01: Transfer Gate
//!
//! 1. Gate transfer requests against the Transfers rules
//! 2. Deactivate a rule and watch the registry notify subscribers
//!
//! Run with: `cargo run -p fmsim-demos --example 01_transfer_gate`

use fmsim_registry::{default_rules, RegistryEvent, RuleRegistry};
use fmsim_workflows::{ComplianceGate, GateDecision, TransferRequest};
use rust_decimal_macros::dec;

fn print_decision(transfer: &TransferRequest, decision: &GateDecision) {
    let label = match decision {
        GateDecision::Approved => "✅ Approved",
        GateDecision::ApprovedWithWarnings(_) => "⚠️  Approved with warnings",
        GateDecision::Blocked(_) => "⛔ Blocked",
    };
    println!("  {} {} ({} -> {}, ${})", label, transfer.id, transfer.from_appropriation, transfer.to_appropriation, transfer.amount);
    for violation in decision.violations() {
        println!("      [{}] {}", violation.severity, violation.message);
    }
}

fn main() {
    println!("=== Demo 01: Transfer Gate ===\n");

    let mut registry = match RuleRegistry::with_rules(default_rules()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Invalid rule catalog: {}", e);
            return;
        }
    };
    registry.subscribe(|event| match event {
        RegistryEvent::Deactivated(id) => println!("  🔔 Rule deactivated: {}", id),
        RegistryEvent::Activated(id) => println!("  🔔 Rule activated: {}", id),
        other => println!("  🔔 Registry change on {}", other.rule_id()),
    });

    let transfers = vec![
        TransferRequest::new("TR-2026-001", "96X3122", "96X3122", dec!(2500000), 2026)
            .with_justification("Flood-fight emergency"),
        TransferRequest::new("TR-2026-002", "96X3122", "96X3123", dec!(400000), 2026),
        TransferRequest::new("TR-2026-003", "96X3123", "96X3123", dec!(75000), 2026)
            .with_justification("Dredging realignment"),
    ];

    println!("📋 Gating {} transfer requests...\n", transfers.len());
    {
        let gate = ComplianceGate::new(&registry);
        for transfer in &transfers {
            match gate.check(transfer) {
                Ok(decision) => print_decision(transfer, &decision),
                Err(e) => println!("  ❌ {}: {}", transfer.id, e),
            }
        }
    }

    println!("\n🔧 Deactivating TR-01 for an approved notification waiver...\n");
    if let Err(e) = registry.set_active("rule-tr-01", false) {
        println!("  ❌ {}", e);
    }

    let gate = ComplianceGate::new(&registry);
    match gate.check(&transfers[0]) {
        Ok(decision) => print_decision(&transfers[0], &decision),
        Err(e) => println!("  ❌ {}", e),
    }

    println!("\n=== Demo Complete ===");
}
