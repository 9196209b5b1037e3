//! Re-export of foundational types from `hitlist-types`.
// Downstream crates depend on `hitlist-core` only

pub use hitlist_types::{Capability, HitlistConfig, HitlistError};
pub use hitlist_types::{ChartEntry, EnrichedEntry, LookupResult, VideoRef};
pub use hitlist_types::{
    NO_INFO_PLACEHOLDER, NOT_FOUND_SENTINEL, SUMMARY_NOT_FOUND_NOTE, VIDEO_NOT_FOUND_NOTE,
};
pub use hitlist_types::{Notice, ProcessReport};
