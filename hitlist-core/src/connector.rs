use async_trait::async_trait;

use crate::{ChartEntry, HitlistError, LookupResult, VideoRef};

/// Focused role trait for connectors that serve a ranked chart.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    /// Fetch the chart and return its entries in rank order.
    ///
    /// A transport error or non-success status is a `HitlistError::Fetch`.
    /// A page that parses to zero rows is `Ok(vec![])`.
    async fn chart(&self) -> Result<Vec<ChartEntry>, HitlistError>;
}

/// Focused role trait for connectors that provide short song summaries.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Look up a summary snippet for the given song.
    ///
    /// Never fails: transport and decode problems are reported as
    /// `LookupResult::Failed`.
    async fn summary(&self, title: &str, artist: &str) -> LookupResult<String>;
}

/// Focused role trait for connectors that find a matching video.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Search for the best matching video for a free-text query.
    async fn media(&self, query: &str) -> LookupResult<VideoRef>;
}

/// Strategy that turns a raw chart document into ordered entries.
///
/// Rows missing any part are skipped, so a structural change in the source
/// degrades to fewer (or zero) entries instead of an error.
pub trait RowExtractor: Send + Sync {
    /// Extract entries from the document in document order.
    fn extract(&self, document: &str) -> Vec<ChartEntry>;
}

/// Main trait implemented by every hitlist connector.
///
/// Capabilities are advertised through the `as_*_provider` accessors; the
/// orchestrator uses them to pick a connector for each role.
pub trait HitlistConnector: Send + Sync {
    /// A stable identifier (e.g., "hitlist-billboard", "hitlist-youtube").
    fn name(&self) -> &'static str;

    /// Advertise chart capability by returning a usable trait object reference when supported.
    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        None
    }

    /// If implemented, returns a trait object for summary lookups.
    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        None
    }

    /// If implemented, returns a trait object for video lookups.
    fn as_media_provider(&self) -> Option<&dyn MediaProvider> {
        None
    }
}
