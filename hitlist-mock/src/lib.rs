//! hitlist-mock
//!
//! Offline connector serving the chart, summary and media capabilities from
//! static fixtures. Lookups for [`FAIL_TITLE`] always fail and lookups for
//! [`TIMEOUT_TITLE`] are delayed, so pipelines can be exercised without a
//! network.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use hitlist_core::connector::{ChartProvider, HitlistConnector, MediaProvider, SummaryProvider};
use hitlist_core::{ChartEntry, HitlistError, LookupResult, VideoRef, summarize_extract};

mod fixtures;

/// Title that forces every lookup for its entry to fail.
pub const FAIL_TITLE: &str = "FAIL";
/// Title whose lookups are artificially slow.
pub const TIMEOUT_TITLE: &str = "TIMEOUT";

/// Chart served by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockChart {
    /// The fixture chart.
    #[default]
    Fixture,
    /// A page that parsed to zero rows.
    Empty,
    /// An unreachable chart source.
    Unreachable,
}

/// Mock connector for offline runs and tests. Serves every capability from static fixtures.
pub struct MockConnector {
    chart: MockChart,
    slow: Duration,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Fixture chart with a 200 ms delay for [`TIMEOUT_TITLE`] lookups.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chart: MockChart::Fixture,
            slow: Duration::from_millis(200),
        }
    }

    /// Serve the given chart variant.
    #[must_use]
    pub const fn with_chart(mut self, chart: MockChart) -> Self {
        self.chart = chart;
        self
    }

    /// Latency applied to lookups for [`TIMEOUT_TITLE`].
    #[must_use]
    pub const fn with_slow_latency(mut self, d: Duration) -> Self {
        self.slow = d;
        self
    }

    /// The fixture chart, independent of the configured variant.
    #[must_use]
    pub fn fixture_chart() -> Vec<ChartEntry> {
        fixtures::chart::entries()
    }

    async fn maybe_fail_or_slow(&self, title: &str, capability: &str) -> Result<(), HitlistError> {
        match title {
            FAIL_TITLE => Err(HitlistError::connector(
                "hitlist-mock",
                format!("forced failure: {capability}"),
            )),
            TIMEOUT_TITLE => {
                tokio::time::sleep(self.slow).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl HitlistConnector for MockConnector {
    fn name(&self) -> &'static str {
        "hitlist-mock"
    }
    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        Some(self as &dyn ChartProvider)
    }
    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        Some(self as &dyn SummaryProvider)
    }
    fn as_media_provider(&self) -> Option<&dyn MediaProvider> {
        Some(self as &dyn MediaProvider)
    }
}

#[async_trait]
impl ChartProvider for MockConnector {
    async fn chart(&self) -> Result<Vec<ChartEntry>, HitlistError> {
        match self.chart {
            MockChart::Fixture => Ok(fixtures::chart::entries()),
            MockChart::Empty => Ok(Vec::new()),
            MockChart::Unreachable => Err(HitlistError::fetch(
                "hitlist-mock",
                "forced failure: chart unreachable",
            )),
        }
    }
}

#[async_trait]
impl SummaryProvider for MockConnector {
    async fn summary(&self, title: &str, artist: &str) -> LookupResult<String> {
        let res = match self.maybe_fail_or_slow(title, "summary").await {
            Ok(()) => fixtures::summaries::by_title(title)
                .map(summarize_extract)
                .ok_or_else(|| HitlistError::not_found(format!("summary for {title} by {artist}"))),
            Err(e) => Err(e),
        };
        LookupResult::from_result(res)
    }
}

#[async_trait]
impl MediaProvider for MockConnector {
    async fn media(&self, query: &str) -> LookupResult<VideoRef> {
        let title = query.split_whitespace().next().unwrap_or_default();
        let res = match self.maybe_fail_or_slow(title, "media").await {
            Ok(()) => fixtures::videos::by_query(query)
                .ok_or_else(|| HitlistError::not_found(format!("video for {query}"))),
            Err(e) => Err(e),
        };
        LookupResult::from_result(res)
    }
}
