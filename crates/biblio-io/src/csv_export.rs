//! CSV export
//!
//! One row per paper in collection order, fixed column order matching the
//! JSON keys; `categories` and `tags` flatten to a single `", "`-joined
//! field.

use crate::error::{IoError, IoResult};
use biblio_domain::Paper;
use std::fs;
use std::path::Path;

const COLUMNS: [&str; 8] = [
    "title",
    "authors",
    "year",
    "doi",
    "categories",
    "tags",
    "summary",
    "notes",
];

/// Render the collection as CSV text.
pub fn render_csv(papers: &[Paper]) -> IoResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(COLUMNS)
        .map_err(|e| IoError::Csv(e.to_string()))?;
    for paper in papers {
        let categories = paper.categories_joined();
        let tags = paper.tags_joined();
        writer
            .write_record([
                paper.title.as_str(),
                paper.authors.as_str(),
                paper.year.as_str(),
                paper.doi.as_str(),
                categories.as_str(),
                tags.as_str(),
                paper.summary.as_str(),
                paper.notes.as_str(),
            ])
            .map_err(|e| IoError::Csv(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| IoError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| IoError::Csv(e.to_string()))
}

/// Export the collection to a CSV file.
pub fn export_csv(path: &Path, papers: &[Paper]) -> IoResult<()> {
    let text = render_csv(papers)?;
    fs::write(path, text)
        .map_err(|e| IoError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    tracing::info!(count = papers.len(), path = %path.display(), "exported CSV");
    Ok(())
}
