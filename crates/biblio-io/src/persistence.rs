//! JSON library files
//!
//! The on-disk format is a JSON array of paper objects with the keys
//! `title, authors, year, doi, categories, tags, summary, notes`, written
//! pretty-printed with 2-space indentation. Manual save/load, backup, and
//! restore all share this format; only the path differs.

use crate::config::PersistConfig;
use crate::error::{IoError, IoResult};
use biblio_domain::Paper;
use std::fs;
use std::path::Path;

/// Write the collection to a library file.
pub fn save_papers(path: &Path, papers: &[Paper]) -> IoResult<()> {
    let json = serde_json::to_string_pretty(papers)
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;
    fs::write(path, json)
        .map_err(|e| IoError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(count = papers.len(), path = %path.display(), "saved library");
    Ok(())
}

/// Read a library file into a new collection.
///
/// The whole file is parsed into a temporary vector before anything is
/// returned, so a parse failure never partially overwrites the caller's
/// in-memory collection.
pub fn load_papers(path: &Path) -> IoResult<Vec<Paper>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)
        .map_err(|e| IoError::ReadFailed(format!("{}: {}", path.display(), e)))?;
    let papers: Vec<Paper> = serde_json::from_str(&text)
        .map_err(|e| IoError::InvalidFormat(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(count = papers.len(), path = %path.display(), "loaded library");
    Ok(papers)
}

/// Write the exit autosave. Called unconditionally on normal shutdown.
pub fn write_autosave(config: &PersistConfig, papers: &[Paper]) -> IoResult<()> {
    save_papers(&config.autosave_file, papers)
}

/// Read the startup autosave, if one exists.
///
/// A missing file is the normal first-run state and yields `Ok(None)`;
/// any other failure is reported.
pub fn load_autosave(config: &PersistConfig) -> IoResult<Option<Vec<Paper>>> {
    if !config.autosave_file.exists() {
        tracing::debug!(path = %config.autosave_file.display(), "no autosave, starting empty");
        return Ok(None);
    }
    load_papers(&config.autosave_file).map(Some)
}
