//! Tabular form of a run: a polars `DataFrame` and its CSV artifact.
//!
//! Every column is text. Reading an exported file back yields the exported
//! strings unchanged, placeholders included.

use std::fs::File;
use std::path::Path;

use hitlist_core::{EnrichedEntry, HitlistError};
use polars::prelude::*;

fn export_err(context: &str, e: impl std::fmt::Display) -> HitlistError {
    HitlistError::export(format!("{context}: {e}"))
}

/// Build a `DataFrame` with one row per entry and the columns
/// `rank,title,artist,summary,videoId,videoUrl,thumbnailUrl,errors`.
///
/// # Errors
/// Returns `Export` if the frame cannot be assembled.
pub fn to_dataframe(entries: &[EnrichedEntry]) -> Result<DataFrame, HitlistError> {
    let rows: Vec<[String; 8]> = entries.iter().map(EnrichedEntry::to_row).collect();
    let columns: Vec<Column> = EnrichedEntry::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<&str> = rows.iter().map(|r| r[i].as_str()).collect();
            Column::new((*name).into(), values)
        })
        .collect();
    DataFrame::new(columns).map_err(|e| export_err("building table", e))
}

/// Write the entries to `path` as CSV with a header row. Truncates an existing file.
///
/// # Errors
/// Returns `Export` if the file cannot be created or written.
#[tracing::instrument(name = "hitlist::export::write_csv", skip(entries, path), fields(rows = entries.len(), path = %path.as_ref().display()))]
pub fn write_csv(entries: &[EnrichedEntry], path: impl AsRef<Path>) -> Result<(), HitlistError> {
    let path = path.as_ref();
    let mut df = to_dataframe(entries)?;
    let mut file =
        File::create(path).map_err(|e| export_err(&format!("creating {}", path.display()), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| export_err(&format!("writing {}", path.display()), e))?;
    tracing::info!(target: "hitlist::export", path = %path.display(), rows = entries.len(), "export written");
    Ok(())
}

/// Read a CSV written by [`write_csv`] back into entries.
///
/// # Errors
/// Returns `Export` if the file cannot be read or lacks one of the expected columns.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<EnrichedEntry>, HitlistError> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_missing_is_null(false))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| export_err(&format!("opening {}", path.display()), e))?
        .finish()
        .map_err(|e| export_err(&format!("reading {}", path.display()), e))?;
    from_dataframe(&df)
}

/// Convert a text `DataFrame` with the export columns back into entries.
///
/// # Errors
/// Returns `Export` if a column is missing or not text.
pub fn from_dataframe(df: &DataFrame) -> Result<Vec<EnrichedEntry>, HitlistError> {
    let mut columns = Vec::with_capacity(EnrichedEntry::COLUMNS.len());
    for name in EnrichedEntry::COLUMNS {
        let col = df
            .column(name)
            .map_err(|e| export_err(&format!("column {name}"), e))?
            .as_materialized_series()
            .str()
            .map_err(|e| export_err(&format!("column {name}"), e))?;
        columns.push(col);
    }
    let cell = |c: usize, row: usize| columns[c].get(row).unwrap_or_default().to_string();
    Ok((0..df.height())
        .map(|row| EnrichedEntry::from_row(std::array::from_fn(|c| cell(c, row))))
        .collect())
}
