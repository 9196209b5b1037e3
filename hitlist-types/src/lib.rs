//! Hitlist data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod entry;
mod error;
mod lookup;
mod reports;

pub use capability::Capability;
pub use config::HitlistConfig;
pub use entry::{
    ChartEntry, EnrichedEntry, NO_INFO_PLACEHOLDER, NOT_FOUND_SENTINEL, SUMMARY_NOT_FOUND_NOTE,
    VIDEO_NOT_FOUND_NOTE, VideoRef,
};
pub use error::HitlistError;
pub use lookup::LookupResult;
pub use reports::{Notice, ProcessReport};
