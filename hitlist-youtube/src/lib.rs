//! hitlist-youtube
//!
//! Media connector backed by the YouTube Data API v3 `search.list` endpoint.
//! Each lookup asks for a single video result.
#![warn(missing_docs)]

mod config;
mod wire;

use async_trait::async_trait;
pub use config::{API_KEY_ENV, DEFAULT_SEARCH_URL, FALLBACK_API_KEY_ENV, YoutubeConfig};
use hitlist_core::{
    HitlistError, LookupResult, VideoRef,
    connector::{HitlistConnector, MediaProvider},
};
use url::Url;

const NAME: &str = "hitlist-youtube";

/// Public connector type serving the media capability.
pub struct YoutubeConnector {
    http: reqwest::Client,
    search_url: Url,
    api_key: Option<String>,
}

impl YoutubeConnector {
    /// Build from a configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable search URL, or an error if the
    /// HTTP client cannot be constructed.
    pub fn new(config: &YoutubeConfig) -> Result<Self, HitlistError> {
        let search_url = Url::parse(&config.search_url)
            .map_err(|e| HitlistError::InvalidArg(format!("youtube search url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HitlistError::Other(format!("http client: {e}")))?;
        if config.api_key.is_none() {
            tracing::warn!(target: "hitlist::youtube", "no API key configured; video lookups will fail");
        }
        Ok(Self {
            http,
            search_url,
            api_key: config.api_key.clone(),
        })
    }

    /// True when an API key was configured.
    #[must_use]
    pub const fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn lookup(&self, query: &str) -> Result<VideoRef, HitlistError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| HitlistError::connector(NAME, "missing API key"))?;

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("key", key)
            .append_pair("q", query)
            .append_pair("part", "snippet")
            .append_pair("type", "video")
            .append_pair("maxResults", "1");
        tracing::debug!(target: "hitlist::youtube", query, "searching videos");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| HitlistError::connector(NAME, e.without_url().to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HitlistError::connector(NAME, format!("status {status}")));
        }
        let body: wire::SearchListResponse = resp
            .json()
            .await
            .map_err(|e| HitlistError::Data(format!("{NAME} search: {}", e.without_url())))?;

        let item = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| HitlistError::not_found(format!("video for {query}")))?;
        let id = item
            .id
            .video_id
            .ok_or_else(|| HitlistError::Data(format!("{NAME} search: result without videoId")))?;
        let thumbnail_url = item
            .snippet
            .thumbnails
            .default
            .map(|t| t.url)
            .ok_or_else(|| HitlistError::Data(format!("{NAME} search: result without default thumbnail")))?;
        Ok(VideoRef {
            id,
            title: item.snippet.title,
            thumbnail_url,
        })
    }
}

#[async_trait]
impl MediaProvider for YoutubeConnector {
    async fn media(&self, query: &str) -> LookupResult<VideoRef> {
        let out = LookupResult::from_result(self.lookup(query).await);
        match &out {
            LookupResult::Found(v) => {
                tracing::debug!(target: "hitlist::youtube", query, video_id = %v.id, "video found");
            }
            LookupResult::NotFound => {
                tracing::warn!(target: "hitlist::youtube", query, outcome = out.kind(), "no video found");
            }
            LookupResult::Failed(reason) => {
                tracing::warn!(target: "hitlist::youtube", query, outcome = out.kind(), reason = %reason, "youtube search failed");
            }
        }
        out
    }
}

impl HitlistConnector for YoutubeConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn as_media_provider(&self) -> Option<&dyn MediaProvider> {
        Some(self)
    }
}
