//! Rule catalog for the security/best-practice engine.
//!
//! The catalog is closed: `RuleId` enumerates every rule and `RuleId::rule`
//! hands out its implementation. Rules look at raw Dockerfile text, not the
//! parsed form, and never carry a severity of their own; the caller's
//! configuration supplies it at evaluation time.

use std::fmt;

use crate::analyzer::types::{RuleResult, Severity};

pub mod exposed_ports;
pub mod healthcheck_present;
pub mod minimal_base_image;
pub mod multi_stage_build;
pub mod no_hardcoded_secrets;
pub mod non_root_user;

/// Identifier of a catalog rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    NonRootUser,
    MinimalBaseImage,
    ExposedPorts,
    NoHardcodedSecrets,
    MultiStageBuild,
    HealthcheckPresent,
}

impl RuleId {
    /// Every catalog rule, in catalog order.
    pub const ALL: [RuleId; 6] = [
        Self::NonRootUser,
        Self::MinimalBaseImage,
        Self::ExposedPorts,
        Self::NoHardcodedSecrets,
        Self::MultiStageBuild,
        Self::HealthcheckPresent,
    ];

    /// Canonical id used in configuration and results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonRootUser => "non-root-user",
            Self::MinimalBaseImage => "minimal-base-image",
            Self::ExposedPorts => "exposed-ports",
            Self::NoHardcodedSecrets => "no-hardcoded-secrets",
            Self::MultiStageBuild => "multi-stage-build",
            Self::HealthcheckPresent => "healthcheck-present",
        }
    }

    /// Legacy `SEC-00N` code accepted as an alias.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonRootUser => "SEC-001",
            Self::MinimalBaseImage => "SEC-002",
            Self::ExposedPorts => "SEC-003",
            Self::NoHardcodedSecrets => "SEC-004",
            Self::MultiStageBuild => "SEC-005",
            Self::HealthcheckPresent => "SEC-006",
        }
    }

    /// Resolve a configured id or legacy code (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s) || id.code().eq_ignore_ascii_case(s))
    }

    /// Severity used when no configuration says otherwise.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::MultiStageBuild | Self::HealthcheckPresent => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// The rule implementation.
    pub fn rule(&self) -> &'static dyn Rule {
        match self {
            Self::NonRootUser => &non_root_user::NonRootUser,
            Self::MinimalBaseImage => &minimal_base_image::MinimalBaseImage,
            Self::ExposedPorts => &exposed_ports::ExposedPorts,
            Self::NoHardcodedSecrets => &no_hardcoded_secrets::NoHardcodedSecrets,
            Self::MultiStageBuild => &multi_stage_build::MultiStageBuild,
            Self::HealthcheckPresent => &healthcheck_present::HealthcheckPresent,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a predicate before a severity is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub passed: bool,
    pub message: &'static str,
}

impl Check {
    pub fn pass(message: &'static str) -> Self {
        Self {
            passed: true,
            message,
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            passed: false,
            message,
        }
    }

    /// Pick the pass or fail message depending on `passed`.
    pub fn from_bool(passed: bool, pass_message: &'static str, fail_message: &'static str) -> Self {
        if passed {
            Self::pass(pass_message)
        } else {
            Self::fail(fail_message)
        }
    }
}

/// A rule that checks raw Dockerfile content.
pub trait Rule: Send + Sync {
    /// Get the catalog id.
    fn id(&self) -> RuleId;

    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule requires.
    fn description(&self) -> &'static str;

    /// Why the rule matters.
    fn rationale(&self) -> &'static str;

    /// Severity used when the configuration does not set one.
    fn default_severity(&self) -> Severity {
        self.id().default_severity()
    }

    /// Run the predicate.
    fn check(&self, content: &str) -> Check;

    /// Run the predicate and attach the configured severity.
    fn evaluate(&self, content: &str, severity: Severity) -> RuleResult {
        let check = self.check(content);
        log::trace!(
            "Rule {} evaluated: passed={} ({})",
            self.id(),
            check.passed,
            severity
        );
        RuleResult::new(self.id().as_str(), check.passed, check.message, severity)
    }
}

/// Get all catalog rules.
pub fn all_rules() -> Vec<&'static dyn Rule> {
    RuleId::ALL.iter().map(|id| id.rule()).collect()
}

/// Multi-line explanation of a rule, looked up by id or legacy code.
pub fn explain(id: &str) -> Option<String> {
    let rule_id = RuleId::parse(id)?;
    let rule = rule_id.rule();
    Some(format!(
        "Rule: {} ({})\nName: {}\nDefault severity: {}\nRequirement: {}\nReason: {}\n",
        rule_id,
        rule_id.code(),
        rule.name(),
        rule.default_severity(),
        rule.description(),
        rule.rationale()
    ))
}

/// Split a line into its uppercased keyword and the remaining tokens.
pub(crate) fn instruction_tokens(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_uppercase();
    Some((keyword, tokens.collect()))
}
