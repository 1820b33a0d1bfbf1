//! Rule store with change notifications.

use crate::error::{RegistryError, RegistryResult};
use fmsim_core::BusinessRule;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    Added(BusinessRule),
    Updated(BusinessRule),
    Removed(BusinessRule),
    Activated(String),
    Deactivated(String),
}

impl RegistryEvent {
    /// Id of the rule the event refers to
    pub fn rule_id(&self) -> &str {
        match self {
            RegistryEvent::Added(rule)
            | RegistryEvent::Updated(rule)
            | RegistryEvent::Removed(rule) => &rule.id,
            RegistryEvent::Activated(id) | RegistryEvent::Deactivated(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&RegistryEvent) + Send + Sync>;

/// Registry shared between threads
pub type SharedRegistry = Arc<RwLock<RuleRegistry>>;

/// Ordered collection of business rules.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<BusinessRule>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from rules, rejecting duplicates
    pub fn with_rules(rules: Vec<BusinessRule>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for rule in rules {
            registry.add(rule)?;
        }
        Ok(registry)
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    // === Queries ===

    pub fn all(&self) -> &[BusinessRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BusinessRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn get_by_code(&self, code: &str) -> Option<&BusinessRule> {
        self.rules.iter().find(|r| r.code.eq_ignore_ascii_case(code))
    }

    pub fn active(&self) -> Vec<BusinessRule> {
        self.rules.iter().filter(|r| r.is_active).cloned().collect()
    }

    /// Case-insensitive domain filter, active and inactive
    pub fn by_domain(&self, domain: &str) -> Vec<BusinessRule> {
        self.rules
            .iter()
            .filter(|r| r.in_domain(domain))
            .cloned()
            .collect()
    }

    pub fn active_in_domain(&self, domain: &str) -> Vec<BusinessRule> {
        self.rules
            .iter()
            .filter(|r| r.is_active && r.in_domain(domain))
            .cloned()
            .collect()
    }

    /// Sorted, deduplicated domain names
    pub fn domains(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|r| r.domain.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // === Mutations ===

    /// Add a rule. A blank id is replaced by a generated UUID.
    ///
    /// Returns the id of the stored rule.
    pub fn add(&mut self, mut rule: BusinessRule) -> RegistryResult<String> {
        if rule.id.trim().is_empty() {
            rule.id = uuid::Uuid::new_v4().to_string();
        }
        if self.get(&rule.id).is_some() {
            return Err(RegistryError::DuplicateRule(rule.id));
        }
        if self.get_by_code(&rule.code).is_some() {
            return Err(RegistryError::DuplicateRule(rule.code));
        }

        tracing::debug!(rule_id = %rule.id, code = %rule.code, "Rule added");
        let id = rule.id.clone();
        self.rules.push(rule.clone());
        self.notify(&RegistryEvent::Added(rule));
        Ok(id)
    }

    /// Replace the rule with the same id
    pub fn update(&mut self, rule: BusinessRule) -> RegistryResult<()> {
        let position = self
            .position(&rule.id)
            .ok_or_else(|| RegistryError::RuleNotFound(rule.id.clone()))?;

        let code_taken = self
            .rules
            .iter()
            .any(|r| r.id != rule.id && r.code.eq_ignore_ascii_case(&rule.code));
        if code_taken {
            return Err(RegistryError::DuplicateRule(rule.code));
        }

        self.rules[position] = rule.clone();
        self.notify(&RegistryEvent::Updated(rule));
        Ok(())
    }

    /// Toggle `is_active`. Returns whether the flag changed.
    pub fn set_active(&mut self, id: &str, active: bool) -> RegistryResult<bool> {
        let position = self
            .position(id)
            .ok_or_else(|| RegistryError::RuleNotFound(id.to_string()))?;

        if self.rules[position].is_active == active {
            return Ok(false);
        }
        self.rules[position].is_active = active;

        let event = if active {
            RegistryEvent::Activated(id.to_string())
        } else {
            RegistryEvent::Deactivated(id.to_string())
        };
        self.notify(&event);
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> RegistryResult<BusinessRule> {
        let position = self
            .position(id)
            .ok_or_else(|| RegistryError::RuleNotFound(id.to_string()))?;

        let removed = self.rules.remove(position);
        self.notify(&RegistryEvent::Removed(removed.clone()));
        Ok(removed)
    }

    // === Subscriptions ===

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&RegistryEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the subscription was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&self, event: &RegistryEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.id == id)
    }
}
