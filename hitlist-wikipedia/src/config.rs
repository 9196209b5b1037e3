use std::time::Duration;

use serde::{Deserialize, Serialize};

/// English Wikipedia action API endpoint.
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Settings for [`crate::WikipediaConnector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// Action API endpoint.
    pub api_url: String,
    /// `User-Agent` header; Wikimedia asks clients to identify themselves.
    pub user_agent: String,
    /// Transport timeout per request.
    pub timeout: Duration,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("hitlist/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl WikipediaConfig {
    /// Point the connector at another action API endpoint.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}
