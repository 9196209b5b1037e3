use futures::stream::{self, StreamExt};
use hitlist_core::{
    Capability, ChartEntry, EnrichedEntry, HitlistError, LookupResult, Notice, ProcessReport,
    SUMMARY_NOT_FOUND_NOTE, VIDEO_NOT_FOUND_NOTE, media_query, watch_url,
};

use crate::core::Hitlist;

impl Hitlist {
    /// Fetch the chart and enrich its first `n` entries.
    ///
    /// Behavior:
    /// - The chart provider is called once. An empty chart, whether genuinely
    ///   empty or the result of a failed fetch, raises [`Notice::NoSongsFound`]
    ///   and returns no entries; no lookups are attempted. A fetch failure is
    ///   kept in `warnings`.
    /// - Fewer than `n` available entries are all processed, without padding.
    /// - Each entry gets one summary lookup, then one media lookup. Misses fall
    ///   back to placeholders with a note; the underlying cause goes to
    ///   `warnings`.
    /// - Entries come back in chart rank order for any `max_in_flight`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `n` is zero, or `Unsupported` if a resolved
    /// connector stops advertising its capability.
    #[tracing::instrument(name = "hitlist::process", skip(self), fields(max_in_flight = self.cfg.max_in_flight))]
    pub async fn process(&self, n: usize) -> Result<ProcessReport, HitlistError> {
        if n == 0 {
            return Err(HitlistError::InvalidArg(
                "number of songs must be a positive integer".to_string(),
            ));
        }

        let mut report = ProcessReport::default();
        let chart = self.fetch_chart().await;
        let entries = match chart {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(target: "hitlist::pipeline", error = %e, "chart fetch failed");
                report.warnings.push(e);
                Vec::new()
            }
        };

        if entries.is_empty() {
            tracing::error!(target: "hitlist::pipeline", "{}", Notice::NoSongsFound.message());
            report.notices.push(Notice::NoSongsFound);
            return Ok(report);
        }

        let selected: Vec<ChartEntry> = entries.into_iter().take(n).collect();
        tracing::info!(target: "hitlist::pipeline", count = selected.len(), "enriching chart entries");

        let parallel = self.cfg.max_in_flight.max(1);
        let enriched: Vec<Result<(EnrichedEntry, Vec<HitlistError>), HitlistError>> =
            stream::iter(selected)
                .map(|entry| self.enrich(entry))
                .buffered(parallel)
                .collect()
                .await;

        for item in enriched {
            let (entry, warnings) = item?;
            report.entries.push(entry);
            report.warnings.extend(warnings);
        }

        let with_notes = report.entries.iter().filter(|e| !e.errors.is_empty()).count();
        let with_video = report.entries.iter().filter(|e| e.has_video()).count();
        tracing::info!(
            target: "hitlist::pipeline",
            entries = report.entries.len(),
            with_notes,
            with_video,
            "processing finished"
        );
        Ok(report)
    }

    async fn fetch_chart(&self) -> Result<Vec<ChartEntry>, HitlistError> {
        let name = self.chart.name();
        let provider = self
            .chart
            .as_chart_provider()
            .ok_or_else(|| HitlistError::unsupported(Capability::Chart.as_str()))?;
        Self::provider_call_with_timeout(
            name,
            Capability::Chart,
            self.cfg.provider_timeout,
            provider.chart(),
        )
        .await
        .map_err(|e| match e {
            HitlistError::ProviderTimeout { connector, .. } => HitlistError::fetch(
                connector,
                format!("timed out after {:?}", self.cfg.provider_timeout),
            ),
            other => other,
        })
    }

    /// Merge one chart entry with its summary and video.
    async fn enrich(
        &self,
        entry: ChartEntry,
    ) -> Result<(EnrichedEntry, Vec<HitlistError>), HitlistError> {
        let summary_name = self.summary.name();
        let media_name = self.media.name();
        let summaries = self
            .summary
            .as_summary_provider()
            .ok_or_else(|| HitlistError::unsupported(Capability::Summary.as_str()))?;
        let videos = self
            .media
            .as_media_provider()
            .ok_or_else(|| HitlistError::unsupported(Capability::Media.as_str()))?;
        let timeout = self.cfg.provider_timeout;

        let summary = Self::lookup_with_timeout(
            summary_name,
            Capability::Summary,
            timeout,
            summaries.summary(&entry.title, &entry.artist),
        )
        .await;
        let query = media_query(&entry.title, &entry.artist);
        let video = Self::lookup_with_timeout(
            media_name,
            Capability::Media,
            timeout,
            videos.media(&query),
        )
        .await;

        tracing::debug!(
            target: "hitlist::pipeline",
            rank = %entry.rank,
            summary = summary.kind(),
            media = video.kind(),
            "lookups finished"
        );

        let mut warnings = Vec::new();
        let label = format!("'{}' by {}", entry.title, entry.artist);
        let mut out = EnrichedEntry::unenriched(entry);

        match summary {
            LookupResult::Found(text) => out.summary = text,
            miss => {
                out.errors.push(SUMMARY_NOT_FOUND_NOTE.to_string());
                warnings.push(miss_warning(summary_name, Capability::Summary, &label, miss));
            }
        }

        match video {
            LookupResult::Found(v) => {
                out.video_url = watch_url(&v.id);
                out.video_id = v.id;
                out.thumbnail_url = v.thumbnail_url;
            }
            miss => {
                out.errors.push(VIDEO_NOT_FOUND_NOTE.to_string());
                warnings.push(miss_warning(media_name, Capability::Media, &label, miss));
            }
        }

        tracing::debug!(
            target: "hitlist::pipeline",
            rank = %out.rank,
            notes = %out.errors_field(),
            "entry enriched"
        );
        Ok((out, warnings))
    }
}

fn miss_warning<T>(
    connector: &str,
    capability: Capability,
    label: &str,
    miss: LookupResult<T>,
) -> HitlistError {
    match miss {
        LookupResult::Failed(reason) => {
            HitlistError::connector(connector, format!("{capability} for {label}: {reason}"))
        }
        LookupResult::NotFound | LookupResult::Found(_) => {
            HitlistError::not_found(format!("{capability} for {label}"))
        }
    }
}
