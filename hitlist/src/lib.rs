//! Hitlist aggregates a ranked music chart and enriches every entry.
//!
//! Overview
//! - Fetches the chart once through a connector serving `ChartProvider`.
//! - For each of the first `n` entries, looks up a short summary
//!   (`SummaryProvider`) and a matching video (`MediaProvider`).
//! - Misses never abort a run: the entry gets fixed placeholders and a
//!   human-readable note, while the cause is kept on the report for diagnostics.
//! - The merged table can be rendered as a polars `DataFrame` and exported to CSV.
//!
//! Building and running a pipeline:
//! ```rust,ignore
//! use std::sync::Arc;
//! use hitlist::Hitlist;
//!
//! let hitlist = Hitlist::builder()
//!     .with_connector(Arc::new(hitlist_mock::MockConnector::new()))
//!     .build()?;
//! let report = hitlist.process(10).await?;
//! hitlist::write_csv(&report.entries, "music_data.csv")?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// CSV and `DataFrame` conversion of enriched entries.
pub mod export;
mod pipeline;

pub use core::{Hitlist, HitlistBuilder};
pub use export::{from_dataframe, read_csv, to_dataframe, write_csv};

// Re-export core types for convenience
pub use hitlist_core::{
    Capability, ChartEntry, EnrichedEntry, HitlistConfig, HitlistConnector, HitlistError,
    LookupResult, NO_INFO_PLACEHOLDER, NOT_FOUND_SENTINEL, Notice, ProcessReport,
    SUMMARY_NOT_FOUND_NOTE, VIDEO_NOT_FOUND_NOTE, VideoRef,
};
