//! Combined syntax and rule results for one Dockerfile.

use serde::Serialize;

use crate::analyzer::engine::RuleSet;
use crate::analyzer::syntax::validate_syntax;
use crate::analyzer::types::{SyntaxResult, ValidationResult};

/// Merged output of the syntax validator and the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub syntax: SyntaxResult,
    pub validation: ValidationResult,
}

impl Report {
    pub fn new(syntax: SyntaxResult, validation: ValidationResult) -> Self {
        Self { syntax, validation }
    }

    /// Syntax is valid and every ERROR rule passed.
    pub fn passed(&self) -> bool {
        self.syntax.valid && self.validation.passed
    }

    /// Whether the result should block acceptance upstream.
    ///
    /// WARNING-severity rule failures and syntax warnings never block.
    pub fn is_blocking(&self) -> bool {
        !self.passed()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_blocking() { 1 } else { 0 }
    }
}

/// Run the syntax validator and the rule engine on the same content.
pub fn analyze(content: &str, rules: &RuleSet) -> Report {
    Report::new(validate_syntax(content), rules.validate(content))
}
