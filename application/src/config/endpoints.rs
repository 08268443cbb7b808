//! Remote API endpoints and request identity.

/// Encyclopedia search API
pub const DEFAULT_ENCYCLOPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Structured-data claims API
pub const DEFAULT_DATA_URL: &str = "https://www.wikidata.org/w/api.php";

/// Client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "gravestone v1.0.0";

/// Where the two lookup requests go and how they identify themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub encyclopedia_url: String,
    pub data_url: String,
    pub user_agent: String,
    /// Ask the encyclopedia to resolve title redirects (`redirects=1`)
    pub follow_redirects: bool,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            encyclopedia_url: DEFAULT_ENCYCLOPEDIA_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: false,
        }
    }
}

impl ApiEndpoints {
    pub fn with_encyclopedia_url(mut self, url: impl Into<String>) -> Self {
        self.encyclopedia_url = url.into();
        self
    }

    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }
}
