//! Compliance-sensitive forms.
//!
//! Each form serializes (camelCase) into the context its domain's rules
//! are written against. Amounts are `Decimal` on the form and plain JSON
//! numbers in the context, so strict equality sees the same value the
//! dashboard would.

use crate::error::{WorkflowError, WorkflowResult};
use fmsim_registry::seed::{DOMAIN_PROJECT_ORDERS, DOMAIN_REIMBURSABLES, DOMAIN_TRANSFERS};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anything that can be gated by the rules of one domain.
pub trait ComplianceSubject {
    /// Domain whose rules apply
    fn domain(&self) -> &str;

    /// Identifier shown in findings and errors
    fn subject_id(&self) -> &str;

    /// Evaluation context
    fn to_context(&self) -> WorkflowResult<Value>;
}

fn serialize_context<T: Serialize>(form: &T) -> WorkflowResult<Value> {
    serde_json::to_value(form).map_err(|e| WorkflowError::Serialization(e).into())
}

/// Fund transfer / reprogramming request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub id: String,
    pub from_appropriation: String,
    pub to_appropriation: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub fiscal_year: i32,
    #[serde(default)]
    pub justification: String,
}

impl TransferRequest {
    pub fn new(id: &str, from: &str, to: &str, amount: Decimal, fiscal_year: i32) -> Self {
        Self {
            id: id.to_string(),
            from_appropriation: from.to_string(),
            to_appropriation: to.to_string(),
            amount,
            fiscal_year,
            justification: String::new(),
        }
    }

    pub fn with_justification(mut self, justification: &str) -> Self {
        self.justification = justification.to_string();
        self
    }

    pub fn is_cross_appropriation(&self) -> bool {
        self.from_appropriation != self.to_appropriation
    }
}

impl ComplianceSubject for TransferRequest {
    fn domain(&self) -> &str {
        DOMAIN_TRANSFERS
    }

    fn subject_id(&self) -> &str {
        &self.id
    }

    fn to_context(&self) -> WorkflowResult<Value> {
        let mut context = serialize_context(self)?;
        if let Value::Object(map) = &mut context {
            map.insert(
                "crossAppropriation".to_string(),
                Value::Bool(self.is_cross_appropriation()),
            );
        }
        Ok(context)
    }
}

/// Supporting documents of an interagency agreement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementDocuments {
    /// FS Form 7600A (General Terms and Conditions) signed
    pub fs7600a: bool,
    /// FS Form 7600B (Order Requirements and Funding) signed
    pub fs7600b: bool,
}

/// Reimbursable billing against a customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursableBilling {
    pub id: String,
    pub customer: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub invoice_days_pending: u32,
    #[serde(default)]
    pub is_advance_billing: bool,
    #[serde(default)]
    pub documents: AgreementDocuments,
}

impl ReimbursableBilling {
    pub fn new(id: &str, customer: &str, amount: Decimal) -> Self {
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            amount,
            invoice_days_pending: 0,
            is_advance_billing: false,
            documents: AgreementDocuments::default(),
        }
    }

    pub fn pending_for(mut self, days: u32) -> Self {
        self.invoice_days_pending = days;
        self
    }

    pub fn advance(mut self) -> Self {
        self.is_advance_billing = true;
        self
    }

    pub fn with_documents(mut self, documents: AgreementDocuments) -> Self {
        self.documents = documents;
        self
    }
}

impl ComplianceSubject for ReimbursableBilling {
    fn domain(&self) -> &str {
        DOMAIN_REIMBURSABLES
    }

    fn subject_id(&self) -> &str {
        &self.id
    }

    fn to_context(&self) -> WorkflowResult<Value> {
        serialize_context(self)
    }
}

/// Project order placed with a performing activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOrder {
    pub id: String,
    pub performing_activity: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Ordering authority, e.g. "Economy Act", "Project Order"
    pub authority: String,
    #[serde(default)]
    pub determination_and_findings: bool,
    pub days_to_start_work: u32,
}

impl ProjectOrder {
    pub fn new(id: &str, performing_activity: &str, amount: Decimal, authority: &str) -> Self {
        Self {
            id: id.to_string(),
            performing_activity: performing_activity.to_string(),
            amount,
            authority: authority.to_string(),
            determination_and_findings: false,
            days_to_start_work: 0,
        }
    }

    pub fn with_findings(mut self) -> Self {
        self.determination_and_findings = true;
        self
    }

    pub fn starting_in(mut self, days: u32) -> Self {
        self.days_to_start_work = days;
        self
    }
}

impl ComplianceSubject for ProjectOrder {
    fn domain(&self) -> &str {
        DOMAIN_PROJECT_ORDERS
    }

    fn subject_id(&self) -> &str {
        &self.id
    }

    fn to_context(&self) -> WorkflowResult<Value> {
        serialize_context(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transfer_context() {
        let transfer = TransferRequest::new("TR-1", "2020", "2050", dec!(1500000), 2026);
        let ctx = transfer.to_context().unwrap();

        assert_eq!(ctx["amount"].as_f64(), Some(1_500_000.0));
        assert_eq!(ctx["fromAppropriation"], "2020");
        assert_eq!(ctx["crossAppropriation"], true);
        assert_eq!(ctx["justification"], "");
        assert_eq!(transfer.domain(), "Transfers");
    }

    #[test]
    fn test_billing_context_nested_documents() {
        let billing = ReimbursableBilling::new("BL-1", "EPA", dec!(25000.50))
            .pending_for(45)
            .advance()
            .with_documents(AgreementDocuments { fs7600a: true, fs7600b: false });
        let ctx = billing.to_context().unwrap();

        assert_eq!(ctx["invoiceDaysPending"], 45);
        assert_eq!(ctx["isAdvanceBilling"], true);
        assert_eq!(ctx["documents"]["fs7600a"], true);
        assert_eq!(ctx["amount"].as_f64(), Some(25000.5));
    }

    #[test]
    fn test_project_order_context() {
        let order = ProjectOrder::new("PO-1", "Engineering Center", dec!(80000), "Economy Act")
            .starting_in(120);
        let ctx = order.to_context().unwrap();

        assert_eq!(ctx["authority"], "Economy Act");
        assert_eq!(ctx["determinationAndFindings"], false);
        assert_eq!(ctx["daysToStartWork"], 120);
        assert_eq!(order.subject_id(), "PO-1");
    }
}
