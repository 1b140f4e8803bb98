//! Dockerfile static analysis core.
//!
//! Two independent passes run over the same Dockerfile text:
//!
//! - **Syntax**: `parser` turns text into an ordered instruction list, then
//!   `syntax` checks that mandatory instructions are present and in place.
//! - **Rules**: `engine` evaluates a configured subset of the `rules` catalog
//!   on the raw text and aggregates pass/fail by severity.
//!
//! `report` merges both outcomes and `formatter` renders them.
//!
//! # Example
//!
//! ```rust
//! use dockguard::analyzer::{validate, validate_syntax, Severity};
//! use dockguard::config::RuleDescriptor;
//!
//! let dockerfile = "FROM python:3.11-alpine\nEXPOSE 8000\nUSER app\n";
//!
//! let syntax = validate_syntax(dockerfile);
//! assert!(syntax.valid);
//!
//! let rules = vec![RuleDescriptor::new("non-root-user", Severity::Error)];
//! let result = validate(dockerfile, &rules);
//! assert!(result.passed);
//! assert_eq!(result.summary, "1 checks passed, 0 failed");
//! ```

pub mod engine;
pub mod formatter;
pub mod parser;
pub mod report;
pub mod rules;
pub mod syntax;
pub mod types;

pub use engine::{validate, RuleSet, UnknownRulePolicy};
pub use formatter::{format_report, Formatter, OutputFormat};
pub use parser::{parse_dockerfile, Instruction, Keyword, ParsedDockerfile};
pub use report::{analyze, Report};
pub use rules::{explain, Rule, RuleId};
pub use syntax::{validate_parsed, validate_syntax};
pub use types::{RuleResult, Severity, SyntaxResult, ValidationResult};
