//! # FMSim Core
//!
//! Core domain types for the financial-management compliance simulation.
//!
//! ## Modules
//!
//! - [`severity`] - Severity (Critical, Warning, Info)
//! - [`operator`] - Condition operators (EQUALS, GREATER_THAN, ...)
//! - [`rule`] - BusinessRule, RuleCondition
//! - [`result`] - RuleEvaluationResult
//! - [`error`] - Core domain errors

pub mod error;
pub mod operator;
pub mod result;
pub mod rule;
pub mod severity;

pub use error::{CoreError, CoreResult};
pub use operator::Operator;
pub use result::{RuleEvaluationResult, COMPLIANT_MESSAGE};
pub use rule::{BusinessRule, RuleCondition};
pub use severity::Severity;

/// Context object rules are evaluated against.
///
/// Structure is caller-defined and never validated.
pub type Context = serde_json::Value;
