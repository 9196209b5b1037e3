//! Chart rows and their enriched form.

use serde::{Deserialize, Serialize};

/// Placeholder summary used when no knowledge-base snippet is available.
pub const NO_INFO_PLACEHOLDER: &str = "No info found.";
/// Placeholder for each video field when no video reference is available.
pub const NOT_FOUND_SENTINEL: &str = "Not found";
/// Note appended when the summary lookup did not produce a snippet.
pub const SUMMARY_NOT_FOUND_NOTE: &str = "Wikipedia info not found.";
/// Note appended when the media lookup did not produce a video.
pub const VIDEO_NOT_FOUND_NOTE: &str = "YouTube video not found.";

const NOTE_SEPARATOR: &str = "; ";

/// One ranked record from the chart source.
///
/// `rank` is the source's display text and is never coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Display rank as printed by the source.
    pub rank: String,
    /// Song title.
    pub title: String,
    /// Credited artist(s).
    pub artist: String,
}

impl ChartEntry {
    /// Build a chart entry from its three text parts.
    pub fn new(rank: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// A matched video as returned by the media lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoRef {
    /// Platform video identifier.
    pub id: String,
    /// Display title of the video.
    pub title: String,
    /// Lowest-resolution thumbnail URL.
    pub thumbnail_url: String,
}

/// A chart entry merged with its summary and video reference.
///
/// Built once per chart entry by the pipeline and handed to presentation as a
/// terminal value. Missing values are represented by the fixed placeholder
/// strings so the exported table stays compatible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrichedEntry {
    /// Display rank as printed by the source.
    pub rank: String,
    /// Song title.
    pub title: String,
    /// Credited artist(s).
    pub artist: String,
    /// Truncated knowledge-base snippet, or [`NO_INFO_PLACEHOLDER`].
    pub summary: String,
    /// Video identifier, or [`NOT_FOUND_SENTINEL`].
    pub video_id: String,
    /// Canonical watch URL, or [`NOT_FOUND_SENTINEL`].
    pub video_url: String,
    /// Thumbnail URL, or [`NOT_FOUND_SENTINEL`].
    pub thumbnail_url: String,
    /// Human-readable failure notes in the order they occurred.
    pub errors: Vec<String>,
}

impl EnrichedEntry {
    /// Column headers of the tabular form, in field order.
    pub const COLUMNS: [&'static str; 8] = [
        "rank",
        "title",
        "artist",
        "summary",
        "videoId",
        "videoUrl",
        "thumbnailUrl",
        "errors",
    ];

    /// Start from a chart entry with every enrichment field at its placeholder.
    #[must_use]
    pub fn unenriched(entry: ChartEntry) -> Self {
        Self {
            rank: entry.rank,
            title: entry.title,
            artist: entry.artist,
            summary: NO_INFO_PLACEHOLDER.to_string(),
            video_id: NOT_FOUND_SENTINEL.to_string(),
            video_url: NOT_FOUND_SENTINEL.to_string(),
            thumbnail_url: NOT_FOUND_SENTINEL.to_string(),
            errors: Vec::new(),
        }
    }

    /// Failure notes joined with `"; "`; empty when there are none.
    #[must_use]
    pub fn errors_field(&self) -> String {
        self.errors.join(NOTE_SEPARATOR)
    }

    /// True when a video reference was attached.
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_id != NOT_FOUND_SENTINEL
    }

    /// The entry as one table row, aligned with [`Self::COLUMNS`].
    #[must_use]
    pub fn to_row(&self) -> [String; 8] {
        [
            self.rank.clone(),
            self.title.clone(),
            self.artist.clone(),
            self.summary.clone(),
            self.video_id.clone(),
            self.video_url.clone(),
            self.thumbnail_url.clone(),
            self.errors_field(),
        ]
    }

    /// Rebuild an entry from a table row aligned with [`Self::COLUMNS`].
    #[must_use]
    pub fn from_row(row: [String; 8]) -> Self {
        let [
            rank,
            title,
            artist,
            summary,
            video_id,
            video_url,
            thumbnail_url,
            errors,
        ] = row;
        let errors = if errors.is_empty() {
            Vec::new()
        } else {
            errors.split(NOTE_SEPARATOR).map(str::to_string).collect()
        };
        Self {
            rank,
            title,
            artist,
            summary,
            video_id,
            video_url,
            thumbnail_url,
            errors,
        }
    }
}
