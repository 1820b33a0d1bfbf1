//! # FMSim Engine
//!
//! Evaluates declarative [`BusinessRule`]s against arbitrary JSON contexts.
//!
//! The engine is a total function: missing fields, type mismatches and
//! malformed comparands resolve to a non-matching condition, never to an
//! error. One result is produced per **active** rule, in input order.
//!
//! ## Example
//!
//! ```rust
//! use fmsim_core::{BusinessRule, RuleCondition, Severity};
//! use fmsim_engine::evaluate_rules;
//! use serde_json::json;
//!
//! let rule = BusinessRule::new("r1", "ADA-01", "Large Reprogramming", "Financial", Severity::Critical)
//!     .when(RuleCondition::greater_than("amount", 1_000_000));
//!
//! let results = evaluate_rules(&[rule], &json!({ "amount": 1_500_000 }));
//! assert_eq!(results.len(), 1);
//! assert!(!results[0].passed);
//! ```
//!
//! [`BusinessRule`]: fmsim_core::BusinessRule

pub mod coerce;
pub mod evaluator;
pub mod outcome;
pub mod path;

pub use evaluator::{condition_matches, evaluate_rule, evaluate_rules, evaluate_rules_at, rule_fires};
pub use outcome::EvaluationOutcome;
pub use path::resolve_path;
