use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::formatter;

#[derive(Parser)]
#[command(name = "dockguard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate Dockerfiles for syntax and security best practices")]
#[command(long_about = "Parses Dockerfiles, checks their structure, and evaluates them against a configurable catalog of security and best-practice rules. ERROR-severity failures produce a non-zero exit status; WARNING-severity failures are advisory.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one or more Dockerfiles
    Validate {
        /// Dockerfiles to validate
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Rule configuration file (YAML)
        #[arg(short, long, value_name = "FILE", env = "DOCKGUARD_RULES")]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tty")]
        format: OutputFormat,

        /// Reject unknown or duplicate rule ids in the configuration
        #[arg(long)]
        strict: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List the rule catalog
    Rules,

    /// Explain why a rule exists
    Explain {
        /// Rule id (e.g. non-root-user) or legacy code (e.g. SEC-001)
        #[arg(value_name = "RULE_ID")]
        rule_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tty,
    Json,
}

impl From<OutputFormat> for formatter::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tty => formatter::OutputFormat::Tty,
            OutputFormat::Json => formatter::OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
