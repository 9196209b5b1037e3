/// Number of characters kept from a knowledge-base extract.
pub const SUMMARY_CHARS: usize = 200;

const ELLIPSIS: &str = "...";
const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Search text for the summary lookup: `"{title} {artist} song"`.
#[must_use]
pub fn summary_query(title: &str, artist: &str) -> String {
    format!("{title} {artist} song")
}

/// Search text for the media lookup: `"{title} {artist} official music video"`.
#[must_use]
pub fn media_query(title: &str, artist: &str) -> String {
    format!("{title} {artist} official music video")
}

/// Keep the first 200 characters of an extract and append `"..."`.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character. The ellipsis is appended even to short extracts.
#[must_use]
pub fn summarize_extract(extract: &str) -> String {
    let mut out: String = extract.chars().take(SUMMARY_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Canonical watch URL for a video id.
#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}
