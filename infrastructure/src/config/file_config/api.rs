//! API configuration from TOML (`[api]` section)

use crate::config::validation::ConfigIssue;
use gravestone_application::ApiEndpoints;
use gravestone_application::config::endpoints::{
    DEFAULT_DATA_URL, DEFAULT_ENCYCLOPEDIA_URL, DEFAULT_USER_AGENT,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw API configuration from TOML
///
/// # Example
///
/// ```toml
/// [api]
/// encyclopedia_url = "https://de.wikipedia.org/w/api.php"
/// data_url = "https://www.wikidata.org/w/api.php"
/// user_agent = "my-tool/1.0 (ops@example.org)"
/// timeout_secs = 30
/// follow_redirects = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    pub encyclopedia_url: String,
    pub data_url: String,
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub follow_redirects: bool,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            encyclopedia_url: DEFAULT_ENCYCLOPEDIA_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            follow_redirects: false,
        }
    }
}

impl FileApiConfig {
    pub fn to_endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::default()
            .with_encyclopedia_url(self.encyclopedia_url.trim())
            .with_data_url(self.data_url.trim())
            .with_user_agent(self.user_agent.trim())
            .with_follow_redirects(self.follow_redirects)
    }

    /// Request timeout; zero falls back to the default
    pub fn timeout(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.timeout_secs == 0 {
            let default = Self::default().timeout_secs;
            return (
                Duration::from_secs(default),
                vec![ConfigIssue::out_of_range(
                    "api.timeout_secs",
                    0,
                    &format!("{}s", default),
                )],
            );
        }
        (Duration::from_secs(self.timeout_secs), vec![])
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("api.encyclopedia_url", &self.encyclopedia_url),
            ("api.data_url", &self.data_url),
            ("api.user_agent", &self.user_agent),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::empty(field));
            }
        }
        issues.extend(self.timeout().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(FileApiConfig::default().validate().is_empty());
    }

    #[test]
    fn test_to_endpoints() {
        let config: FileApiConfig = toml::from_str(
            r#"
encyclopedia_url = " https://fr.wikipedia.org/w/api.php "
follow_redirects = true
"#,
        )
        .unwrap();

        let endpoints = config.to_endpoints();
        assert_eq!(endpoints.encyclopedia_url, "https://fr.wikipedia.org/w/api.php");
        assert_eq!(endpoints.data_url, DEFAULT_DATA_URL);
        assert!(endpoints.follow_redirects);
    }

    #[test]
    fn test_empty_user_agent_is_error() {
        let config = FileApiConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = FileApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let (timeout, issues) = config.timeout();
        assert_eq!(timeout, Duration::from_secs(30));
        assert_eq!(issues.len(), 1);
    }
}
