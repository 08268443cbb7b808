//! Output configuration from TOML (`[output]` section)

use gravestone_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use gravestone_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
///
/// # Example
///
/// ```toml
/// [output]
/// format = "json"   # "text" or "json"; `--output` overrides it
/// color = false     # plain text even on a terminal
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Unset means the command line decides, falling back to text
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
