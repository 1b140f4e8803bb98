//! Rule engine orchestration.
//!
//! Resolves a rule configuration against the catalog, evaluates each rule on
//! raw Dockerfile text and aggregates the results.

use std::collections::HashSet;

use crate::analyzer::rules::RuleId;
use crate::analyzer::types::{Severity, ValidationResult};
use crate::config::{RuleDescriptor, RulesConfig};
use crate::error::{Error, Result};

/// What to do with configured ids that have no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownRulePolicy {
    /// Skip them and log a warning.
    #[default]
    Ignore,
    /// Fail configuration resolution.
    Reject,
}

/// An ordered, resolved set of rules with their configured severities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(RuleId, Severity)>,
}

impl RuleSet {
    /// Resolve descriptors against the catalog, keeping configuration order.
    pub fn from_descriptors(
        descriptors: &[RuleDescriptor],
        policy: UnknownRulePolicy,
    ) -> Result<Self> {
        match policy {
            UnknownRulePolicy::Ignore => Ok(Self::resolve_lenient(descriptors)),
            UnknownRulePolicy::Reject => Self::resolve_strict(descriptors),
        }
    }

    /// Skip unknown ids and repeated ids, keeping the first occurrence.
    fn resolve_lenient(descriptors: &[RuleDescriptor]) -> Self {
        let mut rules = Vec::with_capacity(descriptors.len());
        let mut seen = HashSet::new();

        for descriptor in descriptors {
            let Some(id) = RuleId::parse(&descriptor.id) else {
                log::warn!("Skipping unknown rule id '{}'", descriptor.id);
                continue;
            };
            if !seen.insert(id) {
                log::warn!("Rule '{}' configured more than once, keeping the first", id);
                continue;
            }
            rules.push((id, descriptor.severity));
        }

        Self { rules }
    }

    /// Fail on the first unknown or repeated id.
    fn resolve_strict(descriptors: &[RuleDescriptor]) -> Result<Self> {
        let mut rules = Vec::with_capacity(descriptors.len());
        let mut seen = HashSet::new();

        for descriptor in descriptors {
            let id = RuleId::parse(&descriptor.id)
                .ok_or_else(|| Error::UnknownRule(descriptor.id.clone()))?;
            if !seen.insert(id) {
                return Err(Error::DuplicateRule(id.to_string()));
            }
            rules.push((id, descriptor.severity));
        }

        Ok(Self { rules })
    }

    /// Resolve a loaded configuration, honoring its `strict` flag.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let policy = if config.strict {
            UnknownRulePolicy::Reject
        } else {
            UnknownRulePolicy::Ignore
        };
        Self::from_descriptors(&config.rules, policy)
    }

    /// Every catalog rule at its default severity.
    pub fn catalog() -> Self {
        Self {
            rules: RuleId::ALL
                .iter()
                .map(|id| (*id, id.default_severity()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(RuleId, Severity)> {
        self.rules.iter()
    }

    /// Evaluate every rule in order and aggregate.
    pub fn validate(&self, content: &str) -> ValidationResult {
        let results = self
            .rules
            .iter()
            .map(|(id, severity)| id.rule().evaluate(content, *severity))
            .collect();

        let result = ValidationResult::from_results(results);
        log::debug!("Rule validation: {}", result.summary);
        result
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::catalog()
    }
}

/// Validate content against descriptors, skipping unknown ids.
pub fn validate(content: &str, descriptors: &[RuleDescriptor]) -> ValidationResult {
    RuleSet::resolve_lenient(descriptors).validate(content)
}
