//! Rule configuration loading.
//!
//! Rules are configured in YAML:
//!
//! ```yaml
//! strict: false
//! rules:
//!   - id: non-root-user
//!     severity: ERROR
//!   - id: multi-stage-build
//!     severity: WARNING
//! ```
//!
//! Search order when no path is given:
//! 1. `.dockguard.yaml` / `.dockguard.yml` in the current directory
//! 2. `<config dir>/dockguard/rules.yaml`
//! 3. Built-in defaults

pub mod types;

pub use types::{RuleDescriptor, RulesConfig};

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILES: [&str; 2] = [".dockguard.yaml", ".dockguard.yml"];

/// Get the global rules file path (<config dir>/dockguard/rules.yaml)
pub fn global_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dockguard").join("rules.yaml"))
}

/// Parse a rule configuration from YAML.
pub fn from_yaml_str(yaml: &str) -> Result<RulesConfig> {
    let config: RulesConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load a rule configuration file.
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_yaml_str(&content)?;
    log::debug!(
        "Loaded {} rule(s) from {}",
        config.rules.len(),
        path.display()
    );
    Ok(config)
}

/// Find the first existing rules file in the standard locations.
pub fn find_rules_file() -> Option<PathBuf> {
    LOCAL_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .chain(global_rules_path())
        .find(|path| path.exists())
}

/// Load the explicit file if given, else the first file found, else defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<RulesConfig> {
    if let Some(path) = path {
        return load_rules(path);
    }

    match find_rules_file() {
        Some(found) => load_rules(&found),
        None => {
            log::debug!("No rules file found, using built-in defaults");
            Ok(RulesConfig::default())
        }
    }
}
