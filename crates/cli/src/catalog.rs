//! Rule set selection

use anyhow::{Context, Result};
use fmsim_registry::{default_rules, load_registry, RuleRegistry};
use std::path::Path;

/// Registry from the given rule file, or the built-in catalog
pub fn load(path: Option<&Path>) -> Result<RuleRegistry> {
    match path {
        Some(path) => load_registry(path)
            .with_context(|| format!("Failed to load rules from {:?}", path)),
        None => {
            tracing::debug!("Using built-in rule catalog");
            RuleRegistry::with_rules(default_rules()).context("Built-in catalog is invalid")
        }
    }
}
