//! hitlist-billboard
//!
//! Public connector that implements `HitlistConnector` on top of the Billboard
//! Hot 100 web page. Serves the chart capability only.
#![warn(missing_docs)]

/// Page transport adapters.
pub mod adapter;
mod config;
/// Row extraction from the chart document.
pub mod extract;

use std::sync::Arc;

use adapter::{ChartPage, RealAdapter};
use async_trait::async_trait;
pub use config::{BillboardConfig, DEFAULT_CHART_URL, DEFAULT_USER_AGENT};
pub use extract::{BillboardRowExtractor, RowSelectors};
use hitlist_core::{
    ChartEntry, HitlistError,
    connector::{ChartProvider, HitlistConnector, RowExtractor},
};

/// Public connector type. Production users will construct with `BillboardConnector::new_default()`.
pub struct BillboardConnector {
    chart_url: String,
    page: Arc<dyn ChartPage>,
    extractor: Arc<dyn RowExtractor>,
}

impl BillboardConnector {
    /// Build with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, HitlistError> {
        Self::new(&BillboardConfig::default())
    }

    /// Build from a configuration with a fresh HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &BillboardConfig) -> Result<Self, HitlistError> {
        let page = Arc::new(RealAdapter::from_config(config)?);
        Ok(Self::from_adapter(config, page))
    }

    /// Build from an injected page adapter, e.g. `<dyn ChartPage>::from_fn`.
    pub fn from_adapter(config: &BillboardConfig, page: Arc<dyn ChartPage>) -> Self {
        Self {
            chart_url: config.chart_url.clone(),
            page,
            extractor: Arc::new(BillboardRowExtractor::default()),
        }
    }

    /// Replace the row extraction strategy.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn RowExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Chart page this connector reads.
    #[must_use]
    pub fn chart_url(&self) -> &str {
        &self.chart_url
    }

    /// Fetch the chart, degrading any fetch failure to an empty list.
    ///
    /// The failure is logged; use [`ChartProvider::chart`] to observe it.
    #[tracing::instrument(name = "hitlist_billboard::fetch_top", skip(self))]
    pub async fn fetch_top(&self) -> Vec<ChartEntry> {
        match self.chart().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(target: "hitlist::billboard", error = %e, "error fetching chart page");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ChartProvider for BillboardConnector {
    async fn chart(&self) -> Result<Vec<ChartEntry>, HitlistError> {
        let body = self.page.fetch(&self.chart_url).await?;
        let rows = self.extractor.extract(&body);
        tracing::debug!(target: "hitlist::billboard", rows = rows.len(), "extracted chart rows");
        Ok(rows)
    }
}

impl HitlistConnector for BillboardConnector {
    fn name(&self) -> &'static str {
        "hitlist-billboard"
    }

    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        Some(self)
    }
}
