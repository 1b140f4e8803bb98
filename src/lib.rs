//! # Dockguard
//!
//! Static analysis for Dockerfiles: an instruction parser, a structural
//! syntax validator, and a configurable security/best-practice rule engine.
//!
//! The core is pure. Every call works on an in-memory string, returns plain
//! values, and never fails for malformed Dockerfile content. Only the
//! configuration loader and the command-line front end perform I/O.
//!
//! ## Example
//!
//! ```rust
//! use dockguard::{analyze, RuleSet};
//!
//! let report = analyze("FROM ubuntu:22.04\nUSER root\n", &RuleSet::catalog());
//! assert!(report.syntax.valid);
//! assert!(!report.validation.passed);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::{
    analyze, parse_dockerfile, validate, validate_syntax, Report, RuleResult, RuleSet, Severity,
    SyntaxResult, ValidationResult,
};
pub use config::{RuleDescriptor, RulesConfig};
pub use error::{Error, Result};

use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a parsed command, returning the process exit code.
pub fn run_command(command: Commands) -> Result<i32> {
    match command {
        Commands::Validate {
            files,
            rules,
            format,
            strict,
            no_color,
        } => handlers::handle_validate(handlers::ValidateOptions {
            files,
            rules,
            format: format.into(),
            strict,
            colors: !no_color,
        }),
        Commands::Rules => handlers::handle_rules(),
        Commands::Explain { rule_id } => handlers::handle_explain(&rule_id),
    }
}
