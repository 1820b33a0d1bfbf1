//! # FMSim Registry
//!
//! Holds business rules for the compliance workflows.
//!
//! - [`RuleRegistry`] - owned rule store with change subscriptions
//! - [`loader`] - load rule sets from JSON or YAML files
//! - [`lint`] - flag suspicious rule definitions without rejecting them
//! - [`seed`] - built-in rule catalog

pub mod error;
pub mod lint;
pub mod loader;
pub mod seed;
pub mod store;

pub use error::{RegistryError, RegistryResult};
pub use lint::{lint_rules, IssueKind, RuleIssue};
pub use loader::{load_registry, load_rules, load_rules_from_json, load_rules_from_yaml};
pub use seed::default_rules;
pub use store::{RegistryEvent, RuleRegistry, SharedRegistry, SubscriptionId};
