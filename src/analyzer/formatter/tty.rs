//! TTY formatter for dockguard reports.
//!
//! Uses ANSI escape codes for colors.

use crate::analyzer::formatter::Formatter;
use crate::analyzer::report::Report;
use crate::analyzer::types::Severity;
use std::io::Write;

/// TTY (terminal) output formatter with colors.
#[derive(Debug, Clone)]
pub struct TtyFormatter {
    /// Use colors in output.
    pub colors: bool,
}

impl Default for TtyFormatter {
    fn default() -> Self {
        Self { colors: true }
    }
}

impl TtyFormatter {
    /// Create a new TTY formatter with colors enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a TTY formatter without colors.
    pub fn no_color() -> Self {
        Self { colors: false }
    }

    fn severity_color(&self, severity: Severity) -> &'static str {
        if !self.colors {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[1;31m",   // Bold red
            Severity::Warning => "\x1b[1;33m", // Bold yellow
        }
    }

    fn green(&self) -> &'static str {
        if self.colors { "\x1b[1;32m" } else { "" }
    }

    fn reset(&self) -> &'static str {
        if self.colors { "\x1b[0m" } else { "" }
    }

    fn dim(&self) -> &'static str {
        if self.colors { "\x1b[2m" } else { "" }
    }

    fn bold(&self) -> &'static str {
        if self.colors { "\x1b[1m" } else { "" }
    }
}

impl Formatter for TtyFormatter {
    fn format<W: Write>(
        &self,
        report: &Report,
        filename: &str,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let reset = self.reset();
        let dim = self.dim();
        let red = self.severity_color(Severity::Error);
        let yellow = self.severity_color(Severity::Warning);

        writeln!(writer, "{}{}{}", self.bold(), filename, reset)?;

        if !report.syntax.errors.is_empty() {
            writeln!(writer, "Syntax Errors:")?;
            for error in &report.syntax.errors {
                writeln!(writer, "  {}✗{} {}", red, reset, error)?;
            }
        }
        for warning in &report.syntax.warnings {
            writeln!(writer, "  {}!{} {}", yellow, reset, warning)?;
        }

        if !report.validation.results.is_empty() {
            writeln!(writer, "Security Checks:")?;
        }
        for result in &report.validation.results {
            let (badge, color) = if result.passed {
                ("PASS", self.green())
            } else {
                ("FAIL", self.severity_color(result.severity))
            };
            writeln!(
                writer,
                "  {}{}{} {}{:<7}{} {}{}{}: {}",
                color,
                badge,
                reset,
                dim,
                result.severity.as_str(),
                reset,
                dim,
                result.rule_id,
                reset,
                result.message
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Summary: {}", report.validation.summary)?;

        if report.passed() {
            writeln!(writer, "{}✓ All blocking checks passed{}", self.green(), reset)?;
        } else {
            writeln!(writer, "{}✗ Some blocking checks failed{}", red, reset)?;
        }

        Ok(())
    }
}
