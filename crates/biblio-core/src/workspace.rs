//! The owned application context: store plus history
//!
//! [`Workspace`] is the single object a shell holds. Every mutation goes
//! through it so the pre-mutation snapshot is always filed before the store
//! changes, and failed operations never leave a stray history entry.

use crate::history::HistoryLog;
use crate::stats::CollectionStats;
use crate::store::{PaperStore, StoreError};
use biblio_domain::{validate_paper, Paper, ValidationSeverity};

/// Store and history log, mutated strictly one operation at a time.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    store: PaperStore,
    history: HistoryLog,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection (e.g. an autosave read at startup).
    /// No history entry is recorded for the initial state.
    pub fn with_papers(papers: Vec<Paper>) -> Self {
        let mut store = PaperStore::new();
        store.replace_all(papers);
        Self {
            store,
            history: HistoryLog::new(),
        }
    }

    pub fn papers(&self) -> &[Paper] {
        self.store.all()
    }

    pub fn store(&self) -> &PaperStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Validate and append a paper.
    ///
    /// On validation failure nothing changes: no store mutation, no history
    /// entry.
    pub fn add_paper(&mut self, paper: Paper) -> Result<(), StoreError> {
        ensure_valid(&paper)?;
        self.history.record(self.store.all(), "Add Paper");
        tracing::debug!(title = %paper.title, "adding paper");
        self.store.add(paper);
        Ok(())
    }

    /// Validate and replace the paper at `index` wholesale.
    ///
    /// Bounds are checked before anything else so a selection error pushes
    /// no history entry.
    pub fn update_paper(&mut self, index: usize, paper: Paper) -> Result<(), StoreError> {
        if index >= self.store.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.store.len(),
            });
        }
        ensure_valid(&paper)?;
        self.history.record(self.store.all(), "Edit Paper");
        tracing::debug!(index, title = %paper.title, "updating paper");
        self.store.update(index, paper)
    }

    /// Like [`Workspace::update_paper`], addressed by surrogate id.
    pub fn update_paper_by_id(&mut self, id: &str, paper: Paper) -> Result<(), StoreError> {
        let index = self
            .store
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.update_paper(index, paper)
    }

    /// Remove the paper at `index`, returning it.
    pub fn delete_paper(&mut self, index: usize) -> Result<Paper, StoreError> {
        if index >= self.store.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.store.len(),
            });
        }
        self.history.record(self.store.all(), "Delete Paper");
        tracing::debug!(index, "deleting paper");
        self.store.delete(index)
    }

    /// Like [`Workspace::delete_paper`], addressed by surrogate id.
    pub fn delete_paper_by_id(&mut self, id: &str) -> Result<Paper, StoreError> {
        let index = self
            .store
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.delete_paper(index)
    }

    /// Adopt a freshly loaded or restored collection wholesale.
    ///
    /// Deliberately records no history entry and leaves both stacks alone:
    /// undo after a load steps back to the pre-load collection.
    pub fn replace_papers(&mut self, papers: Vec<Paper>) {
        tracing::debug!(count = papers.len(), "replacing collection");
        self.store.replace_all(papers);
    }

    /// Step back one mutation. Returns false (and changes nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.all()) {
            Some(snapshot) => {
                tracing::debug!(count = snapshot.len(), "undo");
                self.store.replace_all(snapshot);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone mutation. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.all()) {
            Some(snapshot) => {
                tracing::debug!(count = snapshot.len(), "redo");
                self.store.replace_all(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn statistics(&self) -> CollectionStats {
        CollectionStats::from_papers(self.store.all())
    }
}

/// Map validation errors to a [`StoreError::Validation`] carrying all
/// error-severity messages.
fn ensure_valid(paper: &Paper) -> Result<(), StoreError> {
    let messages: Vec<String> = validate_paper(paper)
        .into_iter()
        .filter(|e| e.severity == ValidationSeverity::Error)
        .map(|e| e.message)
        .collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(messages.join("; ")))
    }
}
