//! Built-in rule catalog.
//!
//! Synthetic rules covering the simulation's functional areas. Thresholds
//! are illustrative, not authoritative.

use fmsim_core::{BusinessRule, RuleCondition, Severity};

pub const DOMAIN_FINANCIAL: &str = "Financial";
pub const DOMAIN_TRANSFERS: &str = "Transfers";
pub const DOMAIN_REIMBURSABLES: &str = "Reimbursables";
pub const DOMAIN_PROJECT_ORDERS: &str = "Project Orders";
pub const DOMAIN_REAL_PROPERTY: &str = "Real Property";
pub const DOMAIN_LABOR: &str = "Labor";

/// The seeded rule set, in catalog order
pub fn default_rules() -> Vec<BusinessRule> {
    vec![
        BusinessRule::new("rule-ada-01", "ADA-01", "Anti-Deficiency Threshold", DOMAIN_FINANCIAL, Severity::Critical)
            .with_description("Obligation exceeds the available fund balance")
            .with_logic("amount > 1000000 AND NOT fundsCertified")
            .with_citation("31 U.S.C. 1341")
            .when(RuleCondition::greater_than("amount", 1_000_000))
            .when(RuleCondition::is_false("fundsCertified")),
        BusinessRule::new("rule-ada-02", "ADA-02", "Expired Appropriation", DOMAIN_FINANCIAL, Severity::Critical)
            .with_description("New obligation charged to an expired appropriation")
            .with_logic("appropriationStatus == 'Expired' AND isNewObligation")
            .with_citation("31 U.S.C. 1502")
            .when(RuleCondition::equals("appropriationStatus", "Expired"))
            .when(RuleCondition::is_true("isNewObligation")),
        BusinessRule::new("rule-fin-03", "FIN-03", "Unliquidated Obligation Review", DOMAIN_FINANCIAL, Severity::Warning)
            .with_description("Obligation dormant for more than 180 days")
            .with_logic("daysSinceLastActivity > 180")
            .with_citation("DoD FMR Vol 3, Ch 8")
            .when(RuleCondition::greater_than("daysSinceLastActivity", 180)),
        BusinessRule::new("rule-tr-01", "TR-01", "Reprogramming Threshold", DOMAIN_TRANSFERS, Severity::Critical)
            .with_description("Reprogramming above $1,000,000 requires congressional notification")
            .with_logic("amount > 1000000")
            .with_citation("DoD FMR Vol 3, Ch 6")
            .when(RuleCondition::greater_than("amount", 1_000_000)),
        BusinessRule::new("rule-tr-02", "TR-02", "Cross-Appropriation Transfer", DOMAIN_TRANSFERS, Severity::Warning)
            .with_description("Transfer between different appropriations needs statutory authority")
            .with_logic("fromAppropriation != toAppropriation")
            .with_citation("31 U.S.C. 1532")
            .when(RuleCondition::is_true("crossAppropriation")),
        BusinessRule::new("rule-tr-03", "TR-03", "Missing Justification", DOMAIN_TRANSFERS, Severity::Warning)
            .with_description("Transfer request submitted without justification")
            .with_logic("justification == ''")
            .with_citation("ER 37-1-30")
            .when(RuleCondition::equals("justification", "")),
        BusinessRule::new("rule-bil-01", "BIL-01", "Late Billing", DOMAIN_REIMBURSABLES, Severity::Warning)
            .with_description("Invoice pending more than 30 days")
            .with_logic("invoiceDaysPending > 30")
            .with_citation("DoD FMR Vol 11A, Ch 1")
            .when(RuleCondition::greater_than("invoiceDaysPending", 30)),
        BusinessRule::new("rule-bil-02", "BIL-02", "Advance Billing", DOMAIN_REIMBURSABLES, Severity::Warning)
            .with_description("Advance billing requires an approved advance agreement")
            .with_logic("isAdvanceBilling == true")
            .with_citation("DoD FMR Vol 11A, Ch 1, 010203")
            .when(RuleCondition::is_true("isAdvanceBilling")),
        BusinessRule::new("rule-bil-03", "BIL-03", "Missing FS-7600A", DOMAIN_REIMBURSABLES, Severity::Critical)
            .with_description("Interagency agreement lacks a signed FS Form 7600A")
            .with_logic("documents.fs7600a is not signed")
            .with_citation("Treasury TFM Vol 1, Part 2, Ch 4700")
            .when(RuleCondition::is_false("documents.fs7600a")),
        BusinessRule::new("rule-po-01", "PO-01", "Economy Act Order", DOMAIN_PROJECT_ORDERS, Severity::Critical)
            .with_description("Economy Act order placed without a determination and findings")
            .with_logic("authority == 'Economy Act' AND NOT determinationAndFindings")
            .with_citation("31 U.S.C. 1535; FAR 17.502")
            .when(RuleCondition::equals("authority", "Economy Act"))
            .when(RuleCondition::is_false("determinationAndFindings")),
        BusinessRule::new("rule-po-02", "PO-02", "Project Order Performance", DOMAIN_PROJECT_ORDERS, Severity::Warning)
            .with_description("Work on a project order must begin within 90 days")
            .with_logic("daysToStartWork > 90")
            .with_citation("41 U.S.C. 6307")
            .when(RuleCondition::greater_than("daysToStartWork", 90)),
        BusinessRule::new("rule-rp-01", "RP-01", "Unrecorded Disposal", DOMAIN_REAL_PROPERTY, Severity::Warning)
            .with_description("Disposed asset still carries a book value")
            .with_logic("status == 'Disposed' AND bookValue > 0")
            .with_citation("SFFAS 6")
            .when(RuleCondition::equals("status", "Disposed"))
            .when(RuleCondition::greater_than("bookValue", 0)),
        BusinessRule::new("rule-lab-01", "LAB-01", "Labor Charged to Closed Work Item", DOMAIN_LABOR, Severity::Info)
            .with_description("Labor hours charged to a closed work item")
            .with_logic("workItem.status == 'Closed' AND hours > 0")
            .with_citation("ER 37-1-29")
            .when(RuleCondition::equals("workItem.status", "Closed"))
            .when(RuleCondition::greater_than("hours", 0)),
        BusinessRule::new("rule-lab-02", "LAB-02", "Overtime Cap", DOMAIN_LABOR, Severity::Warning)
            .with_description("Overtime exceeds the pay-period cap")
            .with_logic("overtimeHours > 40")
            .with_citation("5 U.S.C. 5547")
            .when(RuleCondition::greater_than("overtimeHours", 40))
            .inactive(),
    ]
}
