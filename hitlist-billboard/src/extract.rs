use hitlist_core::{ChartEntry, RowExtractor};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// CSS selectors locating one chart row and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSelectors {
    /// Selector matching every chart row.
    pub row: String,
    /// Rank label inside a row (first match wins).
    pub rank: String,
    /// Title inside a row (first match wins).
    pub title: String,
    /// Artist label inside a row (first match wins).
    pub artist: String,
}

impl Default for RowSelectors {
    fn default() -> Self {
        Self {
            row: ".o-chart-results-list-row".to_string(),
            rank: ".c-label".to_string(),
            title: ".c-title".to_string(),
            artist: ".c-label.a-no-trucate".to_string(),
        }
    }
}

/// Default [`RowExtractor`] for the Billboard chart markup.
#[derive(Debug, Clone, Default)]
pub struct BillboardRowExtractor {
    selectors: RowSelectors,
}

struct Parsed {
    row: Selector,
    rank: Selector,
    title: Selector,
    artist: Selector,
}

impl BillboardRowExtractor {
    /// Use custom selectors instead of the current Billboard layout.
    #[must_use]
    pub const fn with_selectors(selectors: RowSelectors) -> Self {
        Self { selectors }
    }

    fn parse(&self) -> Option<Parsed> {
        let parse = |s: &str| match Selector::parse(s) {
            Ok(sel) => Some(sel),
            Err(e) => {
                tracing::error!(target: "hitlist::billboard", selector = s, error = %e, "invalid row selector");
                None
            }
        };
        Some(Parsed {
            row: parse(&self.selectors.row)?,
            rank: parse(&self.selectors.rank)?,
            title: parse(&self.selectors.title)?,
            artist: parse(&self.selectors.artist)?,
        })
    }
}

/// Descendant text nodes, each trimmed, concatenated without separator.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn first_text(row: ElementRef<'_>, sel: &Selector) -> Option<String> {
    row.select(sel).next().map(stripped_text)
}

impl RowExtractor for BillboardRowExtractor {
    fn extract(&self, document: &str) -> Vec<ChartEntry> {
        let Some(sel) = self.parse() else {
            return Vec::new();
        };
        let doc = Html::parse_document(document);
        let mut out = Vec::new();
        for (idx, row) in doc.select(&sel.row).enumerate() {
            let parts = (
                first_text(row, &sel.rank),
                first_text(row, &sel.title),
                first_text(row, &sel.artist),
            );
            match parts {
                (Some(rank), Some(title), Some(artist)) => {
                    out.push(ChartEntry { rank, title, artist });
                }
                _ => {
                    tracing::debug!(target: "hitlist::billboard", row = idx, "skipping row without rank/title/artist");
                }
            }
        }
        out
    }
}
