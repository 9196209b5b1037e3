#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hitlist::{ChartEntry, HitlistConnector, HitlistError, LookupResult, VideoRef};
use hitlist_core::connector::{ChartProvider, MediaProvider, SummaryProvider};
use tokio::time::{Duration, sleep};

/// In-memory connector used by pipeline tests.
/// Every capability is optional and driven by a closure; calls are counted.
pub struct MockConnector {
    pub name: &'static str,
    pub chart_delay: Duration,
    /// Per-title latency applied to both lookups.
    pub lookup_delays: HashMap<String, Duration>,

    pub chart_fn: Option<Arc<dyn Fn() -> Result<Vec<ChartEntry>, HitlistError> + Send + Sync>>,
    pub summary_fn: Option<Arc<dyn Fn(&str, &str) -> LookupResult<String> + Send + Sync>>,
    pub media_fn: Option<Arc<dyn Fn(&str) -> LookupResult<VideoRef> + Send + Sync>>,

    pub chart_calls: AtomicUsize,
    pub summary_calls: AtomicUsize,
    pub media_calls: AtomicUsize,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    pub fn chart_calls(&self) -> usize {
        self.chart_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    pub fn media_calls(&self) -> usize {
        self.media_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.summary_calls() + self.media_calls()
    }

    async fn delay_for(&self, title: &str) {
        if let Some(d) = self.lookup_delays.get(title) {
            sleep(*d).await;
        }
    }
}

impl HitlistConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_chart_provider(&self) -> Option<&dyn ChartProvider> {
        self.chart_fn.as_ref().map(|_| self as &dyn ChartProvider)
    }

    fn as_summary_provider(&self) -> Option<&dyn SummaryProvider> {
        self.summary_fn.as_ref().map(|_| self as &dyn SummaryProvider)
    }

    fn as_media_provider(&self) -> Option<&dyn MediaProvider> {
        self.media_fn.as_ref().map(|_| self as &dyn MediaProvider)
    }
}

#[async_trait]
impl ChartProvider for MockConnector {
    async fn chart(&self) -> Result<Vec<ChartEntry>, HitlistError> {
        self.chart_calls.fetch_add(1, Ordering::SeqCst);
        if !self.chart_delay.is_zero() {
            sleep(self.chart_delay).await;
        }
        match &self.chart_fn {
            Some(f) => f(),
            None => Err(HitlistError::unsupported("chart")),
        }
    }
}

#[async_trait]
impl SummaryProvider for MockConnector {
    async fn summary(&self, title: &str, artist: &str) -> LookupResult<String> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.delay_for(title).await;
        match &self.summary_fn {
            Some(f) => f(title, artist),
            None => LookupResult::Failed("summary unsupported".into()),
        }
    }
}

#[async_trait]
impl MediaProvider for MockConnector {
    async fn media(&self, query: &str) -> LookupResult<VideoRef> {
        self.media_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(title) = self
            .lookup_delays
            .keys()
            .find(|t| query.starts_with(&format!("{t} ")))
        {
            let d = self.lookup_delays[title];
            sleep(d).await;
        }
        match &self.media_fn {
            Some(f) => f(query),
            None => LookupResult::Failed("media unsupported".into()),
        }
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    chart_delay: Duration,
    lookup_delays: HashMap<String, Duration>,
    chart_fn: Option<Arc<dyn Fn() -> Result<Vec<ChartEntry>, HitlistError> + Send + Sync>>,
    summary_fn: Option<Arc<dyn Fn(&str, &str) -> LookupResult<String> + Send + Sync>>,
    media_fn: Option<Arc<dyn Fn(&str) -> LookupResult<VideoRef> + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            chart_delay: Duration::ZERO,
            lookup_delays: HashMap::new(),
            chart_fn: None,
            summary_fn: None,
            media_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
    pub fn chart_delay(mut self, d: Duration) -> Self {
        self.chart_delay = d;
        self
    }
    pub fn lookup_delay(mut self, title: &str, d: Duration) -> Self {
        self.lookup_delays.insert(title.to_string(), d);
        self
    }

    // Chart
    pub fn with_chart_fn<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<Vec<ChartEntry>, HitlistError> + Send + Sync + 'static,
    {
        self.chart_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_chart_ok(mut self, rows: Vec<ChartEntry>) -> Self {
        self.chart_fn = Some(Arc::new(move || Ok(rows.clone())));
        self
    }
    pub fn chart_fails(mut self, msg: &'static str) -> Self {
        self.chart_fn = Some(Arc::new(move || Err(HitlistError::fetch("mock", msg))));
        self
    }

    // Summary
    pub fn with_summary_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> LookupResult<String> + Send + Sync + 'static,
    {
        self.summary_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_summary(mut self, out: LookupResult<String>) -> Self {
        self.summary_fn = Some(Arc::new(move |_t, _a| out.clone()));
        self
    }

    // Media
    pub fn with_media_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> LookupResult<VideoRef> + Send + Sync + 'static,
    {
        self.media_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_media(mut self, out: LookupResult<VideoRef>) -> Self {
        self.media_fn = Some(Arc::new(move |_q| out.clone()));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            chart_delay: self.chart_delay,
            lookup_delays: self.lookup_delays,
            chart_fn: self.chart_fn,
            summary_fn: self.summary_fn,
            media_fn: self.media_fn,
            chart_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
            media_calls: AtomicUsize::new(0),
        })
    }
}
