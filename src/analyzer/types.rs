//! Core result types shared by the syntax validator and the rule engine.
//!
//! - `Severity` - Configured blocking level of a rule
//! - `RuleResult` - Outcome of one rule evaluation
//! - `ValidationResult` - Aggregated rule engine outcome
//! - `SyntaxResult` - Structural validation outcome

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Severity of a rule.
///
/// `Error` failures block acceptance; `Warning` failures are advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }

    /// Whether a failure at this severity blocks acceptance.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Severity::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid severity '{}', expected ERROR or WARNING",
                s
            ))
        })
    }
}

/// Result of a single rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    /// Canonical catalog id of the rule.
    pub rule_id: String,
    /// Whether the predicate held.
    pub passed: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Severity taken from the rule configuration.
    pub severity: Severity,
}

impl RuleResult {
    pub fn new(
        rule_id: impl Into<String>,
        passed: bool,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed,
            message: message.into(),
            severity,
        }
    }

    /// A failed rule with `Error` severity.
    pub fn is_blocking_failure(&self) -> bool {
        !self.passed && self.severity.is_blocking()
    }
}

/// Aggregated outcome of the rule engine.
///
/// `passed` is true iff every `Error`-severity result passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub results: Vec<RuleResult>,
    pub summary: String,
}

impl ValidationResult {
    /// Aggregate rule results, computing `passed` and `summary`.
    pub fn from_results(results: Vec<RuleResult>) -> Self {
        let passed_count = results.iter().filter(|r| r.passed).count();
        let failed_count = results.len() - passed_count;
        let error_failures = results.iter().filter(|r| r.is_blocking_failure()).count();

        let mut summary = format!("{} checks passed, {} failed", passed_count, failed_count);
        if error_failures > 0 {
            summary.push_str(&format!(" ({} critical errors)", error_failures));
        }

        Self {
            passed: error_failures == 0,
            results,
            summary,
        }
    }

    /// All failed results.
    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Failed results with `Error` severity.
    pub fn error_failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| r.is_blocking_failure())
    }

    /// Failed results with `Warning` severity.
    pub fn warning_failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results
            .iter()
            .filter(|r| !r.passed && r.severity == Severity::Warning)
    }
}

/// Outcome of structural syntax validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SyntaxResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl SyntaxResult {
    /// Build a result; validity is derived from the error list.
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("error"), Some(Severity::Error));
        assert_eq!(Severity::parse("ERROR"), Some(Severity::Error));
        assert_eq!(Severity::parse("Warning"), Some(Severity::Warning));
        assert_eq!(Severity::parse("warn"), Some(Severity::Warning));
        assert_eq!(Severity::parse("info"), None);
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");

        let sev: Severity = serde_yaml::from_str("error").unwrap();
        assert_eq!(sev, Severity::Error);
        assert!(serde_yaml::from_str::<Severity>("fatal").is_err());
    }

    #[test]
    fn test_warning_failures_do_not_block() {
        let result = ValidationResult::from_results(vec![
            RuleResult::new("non-root-user", true, "ok", Severity::Error),
            RuleResult::new("healthcheck-present", false, "missing", Severity::Warning),
        ]);
        assert!(result.passed);
        assert_eq!(result.summary, "1 checks passed, 1 failed");
        assert_eq!(result.warning_failures().count(), 1);
        assert_eq!(result.error_failures().count(), 0);
    }

    #[test]
    fn test_error_failure_blocks() {
        let result = ValidationResult::from_results(vec![
            RuleResult::new("non-root-user", false, "root", Severity::Error),
            RuleResult::new("exposed-ports", false, "none", Severity::Error),
            RuleResult::new("multi-stage-build", true, "ok", Severity::Warning),
        ]);
        assert!(!result.passed);
        assert_eq!(result.summary, "1 checks passed, 2 failed (2 critical errors)");
        assert_eq!(result.failed().count(), 2);
    }

    #[test]
    fn test_empty_results_pass() {
        let result = ValidationResult::from_results(Vec::new());
        assert!(result.passed);
        assert_eq!(result.summary, "0 checks passed, 0 failed");
    }

    #[test]
    fn test_syntax_result_validity() {
        assert!(SyntaxResult::new(vec![], vec!["w".to_string()]).valid);
        assert!(!SyntaxResult::new(vec!["e".to_string()], vec![]).valid);
    }
}
