//! hitlist-core
//!
//! Contracts shared across the hitlist ecosystem.
//!
//! - `types`: re-exports of the data transfer objects from `hitlist-types`.
//! - `connector`: the `HitlistConnector` trait and capability provider traits.
//! - `text`: query builders and snippet truncation used by connectors and the
//!   pipeline.
//!
//! Connectors are async and expect a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Connector capability traits and the primary `HitlistConnector` interface.
pub mod connector;
/// Query and snippet helpers.
pub mod text;
pub mod types;

pub use connector::{
    ChartProvider, HitlistConnector, MediaProvider, RowExtractor, SummaryProvider,
};
pub use text::{media_query, summarize_extract, summary_query, watch_url};
pub use types::*;
