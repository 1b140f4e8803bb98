//! JSON formatter for dockguard reports.

use crate::analyzer::formatter::Formatter;
use crate::analyzer::report::Report;
use crate::analyzer::types::{SyntaxResult, ValidationResult};
use serde::Serialize;
use std::io::Write;

/// JSON output formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON formatter with pretty-printing enabled.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    passed: bool,
    syntax: &'a SyntaxResult,
    validation: &'a ValidationResult,
}

impl Formatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        report: &Report,
        filename: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonReport {
            file: filename,
            passed: report.passed(),
            syntax: &report.syntax,
            validation: &report.validation,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }
        .map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}
