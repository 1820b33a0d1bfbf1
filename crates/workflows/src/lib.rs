//! # FMSim Workflows
//!
//! Workflow layer - compliance-sensitive forms and registry scans.
//!
//! - [`forms`] - TransferRequest, ReimbursableBilling, ProjectOrder
//! - [`gate`] - pre-submit compliance gate
//! - [`scan`] - full-registry compliance scan

pub mod error;
pub mod forms;
pub mod gate;
pub mod scan;

pub use error::{WorkflowError, WorkflowResult};
pub use forms::{AgreementDocuments, ComplianceSubject, ProjectOrder, ReimbursableBilling, TransferRequest};
pub use gate::{ComplianceGate, GateDecision};
pub use scan::{ComplianceScanner, RecordFindings, ScanRecord, ScanReport};
