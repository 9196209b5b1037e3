use std::sync::Arc;

use async_trait::async_trait;
use hitlist_core::HitlistError;

use crate::config::BillboardConfig;

const SOURCE: &str = "hitlist-billboard";

/// Page transport abstraction (so we can inject fakes in tests).
#[async_trait]
pub trait ChartPage: Send + Sync {
    /// GET the page at `url` and return its body.
    ///
    /// Transport errors and non-success statuses are `HitlistError::Fetch`.
    async fn fetch(&self, url: &str) -> Result<String, HitlistError>;
}

/// Real adapter backed by a shared `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
}

impl RealAdapter {
    /// Build a client with the configured user agent and timeout.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &BillboardConfig) -> Result<Self, HitlistError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| HitlistError::Other(format!("http client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn map_reqwest_err(e: &reqwest::Error) -> HitlistError {
    if e.is_timeout() {
        HitlistError::fetch(SOURCE, "request timed out")
    } else if let Some(status) = e.status() {
        HitlistError::fetch(SOURCE, format!("status {status}"))
    } else {
        HitlistError::fetch(SOURCE, e.to_string())
    }
}

#[async_trait]
impl ChartPage for RealAdapter {
    async fn fetch(&self, url: &str) -> Result<String, HitlistError> {
        tracing::debug!(target: "hitlist::billboard", url, "fetching chart page");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e))?
            .error_for_status()
            .map_err(|e| map_reqwest_err(&e))?;
        resp.text().await.map_err(|e| map_reqwest_err(&e))
    }
}

/* -------- Lightweight adapter constructors ------- */

impl dyn ChartPage {
    /// Build a `ChartPage` from a closure receiving the requested URL.
    pub fn from_fn<F>(f: F) -> Arc<dyn ChartPage>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<String, HitlistError>,
    {
        struct FnPage<F>(F);
        #[async_trait]
        impl<F> ChartPage for FnPage<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<String, HitlistError>,
        {
            async fn fetch(&self, url: &str) -> Result<String, HitlistError> {
                (self.0)(url.to_string())
            }
        }
        Arc::new(FnPage(f))
    }
}
