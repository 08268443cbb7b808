//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for lookup results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    Text,
    /// JSON object
    Json,
}

impl From<OutputFormat> for gravestone_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for gravestone
#[derive(Parser, Debug)]
#[command(name = "gravestone")]
#[command(author, version, about = "Look up when a person was born and when they died")]
#[command(long_about = r#"
Gravestone resolves a person's name to their birth and death dates.

The lookup has two steps:
1. Search: the name is matched against encyclopedia page titles
2. Claims: the page's linked data item is asked for its birth and death dates

Configuration files are loaded from (in priority order):
1. GRAVESTONE_* environment variables (e.g. GRAVESTONE_API__TIMEOUT_SECS=10)
2. --config <path>     Explicit config file
3. ./gravestone.toml   Project-level config
4. ~/.config/gravestone/config.toml   Global config

Example:
  gravestone Ada Lovelace
  gravestone -o json "Marie Curie"
  gravestone --no-zone-shift --preferred-rank Johann Sebastian Bach
"#)]
pub struct Cli {
    /// Name of the person to look up (words are joined with spaces)
    #[arg(required_unless_present = "show_config", value_name = "NAME")]
    pub name: Vec<String>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Report dates in UTC without the local-offset adjustment
    #[arg(long)]
    pub no_zone_shift: bool,

    /// Prefer statements marked with preferred rank
    #[arg(long)]
    pub preferred_rank: bool,
}

impl Cli {
    /// The name argument as a single string
    pub fn joined_name(&self) -> String {
        self.name.join(" ")
    }
}
