use std::sync::Arc;
use std::time::Duration;

use hitlist_core::{Capability, HitlistConfig, HitlistConnector, HitlistError, LookupResult};

/// Orchestrator that runs the aggregation pipeline over registered connectors.
pub struct Hitlist {
    pub(crate) chart: Arc<dyn HitlistConnector>,
    pub(crate) summary: Arc<dyn HitlistConnector>,
    pub(crate) media: Arc<dyn HitlistConnector>,
    pub(crate) cfg: HitlistConfig,
}

/// Builder for constructing a `Hitlist` orchestrator with custom configuration.
pub struct HitlistBuilder {
    connectors: Vec<Arc<dyn HitlistConnector>>,
    cfg: HitlistConfig,
}

impl Default for HitlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HitlistBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; chart, summary and media capabilities must all
    /// be covered by the connectors registered via [`Self::with_connector`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: HitlistConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// For each capability the first registered connector advertising it is
    /// used. There is no fallback to later connectors.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn HitlistConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the per-provider call timeout.
    ///
    /// A timed-out lookup is recorded as failed; a timed-out chart fetch is a
    /// fetch failure.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Bound how many entries are enriched at once. Values below 1 are treated as 1.
    ///
    /// Output is always in chart rank order, whatever order lookups finish in.
    #[must_use]
    pub const fn max_in_flight(mut self, n: usize) -> Self {
        self.cfg.max_in_flight = n;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: HitlistConfig) -> Self {
        self.cfg = cfg;
        self
    }

    fn first_with(
        &self,
        cap: Capability,
        has: impl Fn(&dyn HitlistConnector) -> bool,
    ) -> Result<Arc<dyn HitlistConnector>, HitlistError> {
        self.connectors
            .iter()
            .find(|c| has(c.as_ref()))
            .cloned()
            .ok_or_else(|| HitlistError::unsupported(cap.as_str()))
    }

    /// Build the `Hitlist` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, or
    /// `Unsupported` if no registered connector serves one of the chart,
    /// summary or media capabilities.
    pub fn build(self) -> Result<Hitlist, HitlistError> {
        if self.connectors.is_empty() {
            return Err(HitlistError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let chart = self.first_with(Capability::Chart, |c| c.as_chart_provider().is_some())?;
        let summary =
            self.first_with(Capability::Summary, |c| c.as_summary_provider().is_some())?;
        let media = self.first_with(Capability::Media, |c| c.as_media_provider().is_some())?;
        Ok(Hitlist {
            chart,
            summary,
            media,
            cfg: self.cfg,
        })
    }
}

impl Hitlist {
    /// Start building a new `Hitlist` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let hitlist = hitlist::Hitlist::builder()
    ///     .with_connector(Arc::new(BillboardConnector::new_default()?))
    ///     .with_connector(Arc::new(WikipediaConnector::new_default()?))
    ///     .with_connector(Arc::new(YoutubeConnector::new(&YoutubeConfig::from_env())?))
    ///     .max_in_flight(4)
    ///     .build()?;
    /// let report = hitlist.process(10).await?;
    /// ```
    #[must_use]
    pub fn builder() -> HitlistBuilder {
        HitlistBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HitlistConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[tracing::instrument(
        name = "hitlist::core::provider_call_with_timeout",
        skip(fut),
        fields(
            connector = connector_name,
            capability = capability.as_str(),
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, HitlistError>
    where
        Fut: core::future::Future<Output = Result<T, HitlistError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(HitlistError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Bound a lookup future; a timeout becomes `LookupResult::Failed`.
    pub(crate) async fn lookup_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> LookupResult<T>
    where
        Fut: core::future::Future<Output = LookupResult<T>>,
    {
        let res = Self::provider_call_with_timeout(connector_name, capability, timeout, async {
            Ok(fut.await)
        })
        .await;
        res.unwrap_or_else(|e| LookupResult::Failed(e.to_string()))
    }
}
