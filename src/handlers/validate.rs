use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::analyzer::formatter::{format_report, OutputFormat};
use crate::analyzer::{analyze, Report, RuleSet};
use crate::config;

/// Options for the `validate` command.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub files: Vec<PathBuf>,
    pub rules: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub colors: bool,
}

/// Validate every file and print one report per file, in input order.
///
/// Returns the process exit code: 1 when any report blocks or any file could
/// not be read, 0 otherwise.
pub fn handle_validate(options: ValidateOptions) -> crate::Result<i32> {
    let mut rules_config = config::load_or_default(options.rules.as_deref())?;
    if options.strict {
        rules_config.strict = true;
    }
    let rule_set = RuleSet::from_config(&rules_config)?;
    log::info!(
        "Validating {} file(s) against {} rule(s)",
        options.files.len(),
        rule_set.len()
    );

    let outcomes: Vec<(&PathBuf, io::Result<Report>)> = options
        .files
        .par_iter()
        .map(|path| (path, validate_file(path, &rule_set)))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut exit_code = 0;

    for (index, (path, outcome)) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(report) => {
                if report.is_blocking() {
                    exit_code = 1;
                }
                if index > 0 && options.format == OutputFormat::Tty {
                    writeln!(out)?;
                }
                format_report(
                    &report,
                    &path.display().to_string(),
                    options.format,
                    options.colors,
                    &mut out,
                )?;
            }
            Err(err) => {
                log::error!("Failed to read {}: {}", path.display(), err);
                eprintln!("Error: failed to read {}: {}", path.display(), err);
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

fn validate_file(path: &Path, rule_set: &RuleSet) -> io::Result<Report> {
    let content = fs::read_to_string(path)?;
    Ok(analyze(&content, rule_set))
}
