//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::entry::EnrichedEntry;
use crate::error::HitlistError;

/// Run-level, user-facing signals raised by a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Notice {
    /// The chart yielded no entries (empty page or failed fetch).
    NoSongsFound,
}

impl Notice {
    /// Message shown to the user for this notice.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoSongsFound => "No songs found!",
        }
    }
}

/// Summary of one aggregation run.
///
/// `entries` is the terminal, rank-ordered table. `notices` carries blocking
/// user-facing signals. `warnings` keeps the underlying failures (chart fetch
/// errors, lookup failures, not-found outcomes) for diagnostics; they never
/// change `entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProcessReport {
    /// Enriched entries in chart rank order.
    pub entries: Vec<EnrichedEntry>,
    /// User-facing signals raised during the run.
    pub notices: Vec<Notice>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<HitlistError>,
}

impl ProcessReport {
    /// True when the run raised the given notice.
    #[must_use]
    pub fn has_notice(&self, notice: Notice) -> bool {
        self.notices.contains(&notice)
    }
}
