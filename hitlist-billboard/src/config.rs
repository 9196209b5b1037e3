use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public Billboard Hot 100 page.
pub const DEFAULT_CHART_URL: &str = "https://www.billboard.com/charts/hot-100/";

/// Browser-like agent; the chart page rejects some bare client strings.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Settings for [`crate::BillboardConnector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillboardConfig {
    /// Chart page to fetch.
    pub chart_url: String,
    /// `User-Agent` header sent with the request.
    pub user_agent: String,
    /// Transport timeout for the page request.
    pub timeout: Duration,
}

impl Default for BillboardConfig {
    fn default() -> Self {
        Self {
            chart_url: DEFAULT_CHART_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl BillboardConfig {
    /// Point the connector at another chart page.
    #[must_use]
    pub fn with_chart_url(mut self, url: impl Into<String>) -> Self {
        self.chart_url = url.into();
        self
    }
}
