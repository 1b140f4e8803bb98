use std::io::{self, Write};

use crate::analyzer::rules::{all_rules, explain};
use crate::error::Error;

/// Print the rule catalog.
pub fn handle_rules() -> crate::Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out)?;
    Ok(0)
}

/// Print the explanation for one rule.
pub fn handle_explain(rule_id: &str) -> crate::Result<i32> {
    let text = explain(rule_id).ok_or_else(|| Error::UnknownRule(rule_id.to_string()))?;
    print!("{}", text);
    Ok(0)
}

fn write_catalog<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{:<22} {:<8} {:<8} {:<32} DESCRIPTION",
        "ID", "CODE", "SEVERITY", "NAME"
    )?;
    for rule in all_rules() {
        let id = rule.id();
        writeln!(
            writer,
            "{:<22} {:<8} {:<8} {:<32} {}",
            id.as_str(),
            id.code(),
            rule.default_severity().as_str(),
            rule.name(),
            rule.description()
        )?;
    }
    Ok(())
}
