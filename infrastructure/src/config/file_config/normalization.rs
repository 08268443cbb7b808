//! Date normalization configuration from TOML (`[normalization]` section)

use crate::config::validation::ConfigIssue;
use gravestone_domain::ZoneShift;
use serde::{Deserialize, Serialize};

const VALID_SHIFTS: &[&str] = &["local", "none", "fixed"];

/// Raw normalization configuration from TOML
///
/// # Example
///
/// ```toml
/// [normalization]
/// zone_shift = "fixed"          # "local", "none" or "fixed"
/// zone_offset_minutes = -300    # only read when zone_shift = "fixed"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNormalizationConfig {
    pub zone_shift: String,
    /// Local UTC offset in minutes, east positive
    pub zone_offset_minutes: Option<i32>,
}

impl Default for FileNormalizationConfig {
    fn default() -> Self {
        Self {
            zone_shift: "local".to_string(),
            zone_offset_minutes: None,
        }
    }
}

impl FileNormalizationConfig {
    /// Parse the zone shift policy, returning warnings on failure.
    pub fn parse_zone_shift(&self) -> (ZoneShift, Vec<ConfigIssue>) {
        match self.zone_shift.trim().to_lowercase().as_str() {
            "local" => (ZoneShift::Local, vec![]),
            "none" | "utc" => (ZoneShift::None, vec![]),
            "fixed" => {
                let minutes = self.zone_offset_minutes.unwrap_or(0);
                match ZoneShift::fixed_minutes(minutes) {
                    Some(shift) => (shift, vec![]),
                    None => (
                        ZoneShift::Local,
                        vec![ConfigIssue::out_of_range(
                            "normalization.zone_offset_minutes",
                            i64::from(minutes),
                            "'local'",
                        )],
                    ),
                }
            }
            _ => (
                ZoneShift::Local,
                vec![ConfigIssue::invalid_enum(
                    "normalization.zone_shift",
                    &self.zone_shift,
                    VALID_SHIFTS,
                    "local",
                )],
            ),
        }
    }
}
