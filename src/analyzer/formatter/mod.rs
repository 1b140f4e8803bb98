//! Output formatters for dockguard reports.
//!
//! - **TTY**: Colored terminal output for human readability
//! - **JSON**: Machine-readable format for CI/CD pipelines

mod json;
mod tty;

pub use json::JsonFormatter;
pub use tty::TtyFormatter;

use crate::analyzer::report::Report;
use std::io::Write;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored terminal output (default)
    #[default]
    Tty,
    /// JSON format for CI/CD
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tty" | "terminal" | "text" => Some(Self::Tty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names.
    pub fn all_names() -> &'static [&'static str] {
        &["tty", "json"]
    }
}

/// Trait for formatting reports.
pub trait Formatter {
    /// Format the report and write to the given writer.
    fn format<W: Write>(&self, report: &Report, filename: &str, writer: &mut W)
        -> std::io::Result<()>;

    /// Format the report to a string.
    fn format_to_string(&self, report: &Report, filename: &str) -> String {
        let mut buf = Vec::new();
        self.format(report, filename, &mut buf).unwrap_or_default();
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Format a report using the specified output format.
pub fn format_report<W: Write>(
    report: &Report,
    filename: &str,
    format: OutputFormat,
    colors: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Tty => {
            let formatter = if colors {
                TtyFormatter::new()
            } else {
                TtyFormatter::no_color()
            };
            formatter.format(report, filename, writer)
        }
        OutputFormat::Json => JsonFormatter::new().format(report, filename, writer),
    }
}
