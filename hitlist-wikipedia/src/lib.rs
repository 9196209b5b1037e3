//! hitlist-wikipedia
//!
//! Summary connector backed by the MediaWiki action API. A lookup searches for
//! `"{title} {artist} song"`, takes the first hit and reads the plain-text
//! intro extract of that page.
#![warn(missing_docs)]

mod config;
mod wire;

pub use config::{DEFAULT_API_URL, WikipediaConfig};

use async_trait::async_trait;
use hitlist_core::{
    HitlistError, LookupResult,
    connector::{HitlistConnector, SummaryProvider},
    summarize_extract, summary_query,
};
use serde::de::DeserializeOwned;
use url::Url;

const NAME: &str = "hitlist-wikipedia";

/// Public connector type serving the summary capability.
pub struct WikipediaConnector {
    http: reqwest::Client,
    api_url: Url,
}

impl WikipediaConnector {
    /// Build with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, HitlistError> {
        Self::new(&WikipediaConfig::default())
    }

    /// Build from a configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable API URL, or an error if the HTTP
    /// client cannot be constructed.
    pub fn new(config: &WikipediaConfig) -> Result<Self, HitlistError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| HitlistError::InvalidArg(format!("wikipedia api url: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| HitlistError::Other(format!("http client: {e}")))?;
        Ok(Self { http, api_url })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("srsearch", query)
            .append_pair("format", "json");
        url
    }

    fn extract_url(&self, page_id: u64) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("prop", "extracts")
            .append_key_only("exintro")
            .append_key_only("explaintext")
            .append_pair("pageids", &page_id.to_string())
            .append_pair("format", "json");
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, step: &str) -> Result<T, HitlistError> {
        tracing::debug!(target: "hitlist::wikipedia", %url, step, "requesting");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| HitlistError::connector(NAME, format!("{step}: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HitlistError::connector(NAME, format!("{step}: status {status}")));
        }
        resp.json::<T>()
            .await
            .map_err(|e| HitlistError::Data(format!("{NAME} {step}: {e}")))
    }

    async fn lookup(&self, title: &str, artist: &str) -> Result<String, HitlistError> {
        let query = summary_query(title, artist);
        let what = || format!("summary for {title} by {artist}");

        let found: wire::SearchResponse = self.get_json(self.search_url(&query), "search").await?;
        let hit = found
            .query
            .and_then(|q| q.search.into_iter().next())
            .ok_or_else(|| HitlistError::not_found(what()))?;
        let page_id = hit
            .pageid
            .ok_or_else(|| HitlistError::Data(format!("{NAME} search: hit without pageid")))?;

        let content: wire::ExtractResponse =
            self.get_json(self.extract_url(page_id), "extract").await?;
        let extract = content
            .query
            .and_then(|mut q| q.pages.remove(&page_id.to_string()))
            .and_then(|p| p.extract)
            .ok_or_else(|| HitlistError::not_found(what()))?;
        Ok(summarize_extract(&extract))
    }
}

#[async_trait]
impl SummaryProvider for WikipediaConnector {
    async fn summary(&self, title: &str, artist: &str) -> LookupResult<String> {
        let out = LookupResult::from_result(self.lookup(title, artist).await);
        match &out {
            LookupResult::Found(_) => {}
            LookupResult::NotFound => {
                tracing::warn!(target: "hitlist::wikipedia", title, artist, outcome = out.kind(), "no wikipedia page found");
            }
            LookupResult::Failed(reason) => {
                tracing::warn!(target: "hitlist::wikipedia", title, artist, outcome = out.kind(), reason = %reason, "wikipedia lookup failed");
            }
        }
        out
    }
}

impl HitlistConnector for WikipediaConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self)
    }
}
