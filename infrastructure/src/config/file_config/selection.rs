//! Statement selection configuration from TOML (`[selection]` section)

use crate::config::validation::ConfigIssue;
use gravestone_domain::TieBreak;
use serde::{Deserialize, Serialize};

/// Raw selection configuration from TOML
///
/// ```toml
/// [selection]
/// claims = "first"    # "first" or "preferred"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionConfig {
    pub claims: String,
}

impl Default for FileSelectionConfig {
    fn default() -> Self {
        Self {
            claims: "first".to_string(),
        }
    }
}

impl FileSelectionConfig {
    pub fn parse_claims(&self) -> (TieBreak, Vec<ConfigIssue>) {
        match self.claims.parse::<TieBreak>() {
            Ok(rule) => (rule, vec![]),
            Err(_) => (
                TieBreak::First,
                vec![ConfigIssue::invalid_enum(
                    "selection.claims",
                    &self.claims,
                    &["first", "preferred"],
                    "first",
                )],
            ),
        }
    }
}
