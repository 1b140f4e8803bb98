use serde::{Deserialize, Serialize};

use crate::analyzer::rules::RuleId;
use crate::analyzer::types::Severity;

/// One configured rule: which catalog entry to run and how severe a failure is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub id: String,
    pub severity: Severity,
}

impl RuleDescriptor {
    pub fn new(id: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            severity,
        }
    }
}

/// Rule configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Reject unknown rule ids instead of skipping them.
    #[serde(default)]
    pub strict: bool,
    /// Rules to evaluate, in order.
    #[serde(default)]
    pub rules: Vec<RuleDescriptor>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            strict: false,
            rules: RuleId::ALL
                .iter()
                .map(|id| RuleDescriptor::new(id.as_str(), id.default_severity()))
                .collect(),
        }
    }
}
