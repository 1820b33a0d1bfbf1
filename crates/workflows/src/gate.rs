//! Pre-submit compliance gate.
//!
//! Evaluates the active rules of a form's domain. Any fired Critical rule
//! blocks the submission; other fired rules are reported as warnings.

use crate::error::{WorkflowError, WorkflowResult};
use crate::forms::ComplianceSubject;
use fmsim_core::RuleEvaluationResult;
use fmsim_engine::{evaluate_rules, EvaluationOutcome};
use fmsim_registry::RuleRegistry;

/// Decision of the gate for one submission
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Approved,
    /// Only advisory rules fired
    ApprovedWithWarnings(Vec<RuleEvaluationResult>),
    /// At least one Critical rule fired; holds every violation
    Blocked(Vec<RuleEvaluationResult>),
}

impl GateDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GateDecision::Blocked(_))
    }

    pub fn violations(&self) -> &[RuleEvaluationResult] {
        match self {
            GateDecision::Approved => &[],
            GateDecision::ApprovedWithWarnings(v) | GateDecision::Blocked(v) => v.as_slice(),
        }
    }

    fn from_outcome(outcome: &EvaluationOutcome) -> Self {
        let violations: Vec<RuleEvaluationResult> =
            outcome.violations().into_iter().cloned().collect();

        if outcome.is_blocked() {
            GateDecision::Blocked(violations)
        } else if violations.is_empty() {
            GateDecision::Approved
        } else {
            GateDecision::ApprovedWithWarnings(violations)
        }
    }
}

/// Compliance gate over a registry
pub struct ComplianceGate<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> ComplianceGate<'a> {
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Evaluate the subject against its domain's active rules
    pub fn evaluate<S: ComplianceSubject>(&self, subject: &S) -> WorkflowResult<EvaluationOutcome> {
        let rules = self.registry.active_in_domain(subject.domain());
        let context = subject.to_context()?;
        Ok(EvaluationOutcome::from_results(evaluate_rules(&rules, &context)))
    }

    pub fn check<S: ComplianceSubject>(&self, subject: &S) -> WorkflowResult<GateDecision> {
        let outcome = self.evaluate(subject)?;
        let decision = GateDecision::from_outcome(&outcome);

        tracing::info!(
            subject = subject.subject_id(),
            domain = subject.domain(),
            rules = outcome.total(),
            violations = decision.violations().len(),
            blocked = decision.is_blocked(),
            "Compliance gate evaluated"
        );
        Ok(decision)
    }

    /// Check and fail when blocked. Returns the advisory violations on success.
    pub fn submit<S: ComplianceSubject>(&self, subject: &S) -> WorkflowResult<Vec<RuleEvaluationResult>> {
        match self.check(subject)? {
            GateDecision::Approved => Ok(Vec::new()),
            GateDecision::ApprovedWithWarnings(warnings) => Ok(warnings),
            GateDecision::Blocked(violations) => {
                let critical = violations.iter().filter(|r| r.is_blocking()).count();
                Err(WorkflowError::blocked(subject.subject_id(), critical).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{AgreementDocuments, ProjectOrder, ReimbursableBilling, TransferRequest};
    use fmsim_core::{BusinessRule, RuleCondition, Severity};
    use fmsim_registry::default_rules;
    use rust_decimal_macros::dec;

    fn registry() -> RuleRegistry {
        RuleRegistry::with_rules(default_rules()).unwrap()
    }

    #[test]
    fn test_large_reprogramming_blocked() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);
        let transfer = TransferRequest::new("TR-1", "2020", "2020", dec!(1500000), 2026)
            .with_justification("Hurricane recovery");

        let decision = gate.check(&transfer).unwrap();
        assert!(decision.is_blocked());
        assert_eq!(decision.violations().len(), 1);
        assert_eq!(decision.violations()[0].rule_id, "rule-tr-01");
    }

    #[test]
    fn test_small_transfer_with_warnings() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);
        let transfer = TransferRequest::new("TR-2", "2020", "2050", dec!(250000), 2026);

        let decision = gate.check(&transfer).unwrap();
        // Cross-appropriation and missing justification
        assert!(matches!(decision, GateDecision::ApprovedWithWarnings(ref v) if v.len() == 2));
    }

    #[test]
    fn test_clean_transfer_approved() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);
        let transfer = TransferRequest::new("TR-3", "2020", "2020", dec!(1000), 2026)
            .with_justification("Realign O&M");

        assert_eq!(gate.check(&transfer).unwrap(), GateDecision::Approved);
        assert!(gate.submit(&transfer).unwrap().is_empty());
    }

    #[test]
    fn test_billing_missing_7600a_submit_fails() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);
        let billing = ReimbursableBilling::new("BL-1", "FEMA", dec!(40000)).pending_for(45);

        let err = gate.submit(&billing).unwrap_err();
        let workflow_err = err.downcast_ref::<WorkflowError>().unwrap();
        assert!(workflow_err.is_blocked());
        assert!(err.to_string().contains("BL-1"));
    }

    #[test]
    fn test_billing_late_and_advance_warns() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);
        let billing = ReimbursableBilling::new("BL-2", "FEMA", dec!(40000))
            .pending_for(45)
            .advance()
            .with_documents(AgreementDocuments { fs7600a: true, fs7600b: true });

        let warnings = gate.submit(&billing).unwrap();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_economy_act_order() {
        let registry = registry();
        let gate = ComplianceGate::new(&registry);

        let without = ProjectOrder::new("PO-1", "ERDC", dec!(90000), "Economy Act");
        assert!(gate.check(&without).unwrap().is_blocked());

        let with = without.clone().with_findings();
        assert_eq!(gate.check(&with).unwrap(), GateDecision::Approved);
    }

    #[test]
    fn test_amount_strict_equality_on_typed_form() {
        let rules = vec![
            BusinessRule::new("rule-tr-eq", "TR-EQ", "Exact Amount", "Transfers", Severity::Critical)
                .with_description("Transfer equals the apportioned ceiling")
                .when(RuleCondition::equals("amount", 1_500_000)),
            BusinessRule::new("rule-tr-ne", "TR-NE", "Nonzero Amount", "Transfers", Severity::Info)
                .when(RuleCondition::not_equals("amount", 0)),
            BusinessRule::new("rule-tr-cents", "TR-CENTS", "Half Dollar", "Transfers", Severity::Warning)
                .when(RuleCondition::contains("amount", ".5")),
        ];
        let registry = RuleRegistry::with_rules(rules).unwrap();
        let gate = ComplianceGate::new(&registry);

        let exact = TransferRequest::new("TR-5", "2020", "2020", dec!(1500000), 2026);
        let decision = gate.check(&exact).unwrap();
        assert!(decision.is_blocked());
        let fired: Vec<&str> = decision.violations().iter().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(fired, vec!["rule-tr-eq", "rule-tr-ne"]);

        let zero = TransferRequest::new("TR-6", "2020", "2020", dec!(0), 2026);
        assert_eq!(gate.check(&zero).unwrap(), GateDecision::Approved);

        let cents = TransferRequest::new("TR-7", "2020", "2020", dec!(25000.50), 2026);
        let decision = gate.check(&cents).unwrap();
        assert!(decision.violations().iter().any(|r| r.rule_id == "rule-tr-cents"));
    }

    #[test]
    fn test_deactivated_rule_not_applied() {
        let mut registry = registry();
        registry.set_active("rule-tr-01", false).unwrap();
        let gate = ComplianceGate::new(&registry);
        let transfer = TransferRequest::new("TR-4", "2020", "2020", dec!(5000000), 2026)
            .with_justification("Emergency");

        assert_eq!(gate.check(&transfer).unwrap(), GateDecision::Approved);
    }
}
