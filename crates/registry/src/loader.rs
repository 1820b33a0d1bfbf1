//! Load rule sets from JSON or YAML files.
//!
//! A document is either a bare list of rules or `{ rules: [...] }`.

use crate::error::{RegistryError, RegistryResult};
use crate::lint::lint_rules;
use crate::store::RuleRegistry;
use fmsim_core::BusinessRule;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RulesDocument {
    Wrapped { rules: Vec<BusinessRule> },
    Bare(Vec<BusinessRule>),
}

impl RulesDocument {
    fn into_rules(self) -> Vec<BusinessRule> {
        match self {
            RulesDocument::Wrapped { rules } | RulesDocument::Bare(rules) => rules,
        }
    }
}

/// Parse rules from a JSON string
pub fn load_rules_from_json(json: &str) -> RegistryResult<Vec<BusinessRule>> {
    let doc: RulesDocument = serde_json::from_str(json)?;
    Ok(doc.into_rules())
}

/// Parse rules from a YAML string
pub fn load_rules_from_yaml(yaml: &str) -> RegistryResult<Vec<BusinessRule>> {
    let doc: RulesDocument = serde_yaml::from_str(yaml)?;
    Ok(doc.into_rules())
}

/// Load rules from a file; the format follows the extension.
///
/// Lint issues are logged, not returned.
pub fn load_rules(path: &Path) -> RegistryResult<Vec<BusinessRule>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    let rules = match extension.as_str() {
        "json" => load_rules_from_json(&content)?,
        "yaml" | "yml" => load_rules_from_yaml(&content)?,
        _ => return Err(RegistryError::UnsupportedFormat(path.display().to_string())),
    };

    for issue in lint_rules(&rules) {
        tracing::warn!("Rule lint: {}", issue);
    }
    tracing::info!("Loaded {} rules from {:?}", rules.len(), path);

    Ok(rules)
}

/// Load a rule file straight into a registry
pub fn load_registry(path: &Path) -> RegistryResult<RuleRegistry> {
    RuleRegistry::with_rules(load_rules(path)?)
}
