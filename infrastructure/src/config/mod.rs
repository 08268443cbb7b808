//! Configuration file loading for gravestone
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GRAVESTONE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./gravestone.toml` or `./.gravestone.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/gravestone/config.toml`
//! 5. Default values

mod file_config;
mod loader;
pub mod validation;

pub use file_config::{
    FileApiConfig, FileConfig, FileNormalizationConfig, FileOutputConfig, FileOutputFormat,
    FileSelectionConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
