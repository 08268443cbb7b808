//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod normalization;
mod output;
mod selection;

pub use api::FileApiConfig;
pub use normalization::FileNormalizationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use selection::FileSelectionConfig;

use super::validation::ConfigIssue;
use gravestone_application::LookupConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote API settings
    pub api: FileApiConfig,
    /// Date normalization settings
    pub normalization: FileNormalizationConfig,
    /// Statement selection settings
    pub selection: FileSelectionConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(self.normalization.parse_zone_shift().1);
        issues.extend(self.selection.parse_claims().1);
        issues
    }

    /// Build the use case configuration, applying fallbacks for invalid values.
    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig::default()
            .with_endpoints(self.api.to_endpoints())
            .with_zone_shift(self.normalization.parse_zone_shift().0)
            .with_claim_selection(self.selection.parse_claims().0)
    }

    /// Request timeout for the HTTP transport
    pub fn timeout(&self) -> Duration {
        self.api.timeout().0
    }
}
