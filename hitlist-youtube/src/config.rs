use std::time::Duration;

use serde::{Deserialize, Serialize};

/// YouTube Data API v3 search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Primary environment variable holding the API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
/// Fallback environment variable holding the API key.
pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Settings for [`crate::YoutubeConnector`].
///
/// The key is explicit configuration. Without one the connector still builds,
/// but every lookup fails.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeConfig {
    /// Data API key.
    pub api_key: Option<String>,
    /// Search endpoint.
    pub search_url: String,
    /// Transport timeout per request.
    pub timeout: Duration,
}

impl std::fmt::Debug for YoutubeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("search_url", &self.search_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl YoutubeConfig {
    /// Default settings with the given key.
    #[must_use]
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Default settings with the key read from `YOUTUBE_API_KEY`, falling back
    /// to `GOOGLE_API_KEY`. Empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: read(API_KEY_ENV).or_else(|| read(FALLBACK_API_KEY_ENV)),
            ..Self::default()
        }
    }

    /// Point the connector at another search endpoint.
    #[must_use]
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }
}
