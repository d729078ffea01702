//! The authoritative ordered collection of papers

use biblio_domain::Paper;

/// Errors from the paper store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Index {index} out of bounds (collection has {len} papers)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Paper not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Ordered collection of papers, addressed by zero-based position.
///
/// The store owns the canonical sequence. Iteration order is insertion
/// order, and every query result preserves it. Positions shift on delete;
/// anything that needs to survive a reordering holds a [`Paper::id`] and
/// resolves it through [`PaperStore::index_of`].
#[derive(Debug, Clone, Default)]
pub struct PaperStore {
    papers: Vec<Paper>,
}

impl PaperStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paper to the end of the collection.
    ///
    /// No duplicate detection; callers validate required fields first.
    pub fn add(&mut self, paper: Paper) {
        self.papers.push(paper);
    }

    /// Replace the record at `index` wholesale.
    ///
    /// The stored record keeps its original id: an update changes the
    /// fields, not the identity.
    pub fn update(&mut self, index: usize, mut paper: Paper) -> Result<(), StoreError> {
        let len = self.papers.len();
        let slot = self
            .papers
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;
        paper.id = slot.id.clone();
        *slot = paper;
        Ok(())
    }

    /// Remove and return the record at `index`, shifting later records down.
    pub fn delete(&mut self, index: usize) -> Result<Paper, StoreError> {
        if index >= self.papers.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.papers.len(),
            });
        }
        Ok(self.papers.remove(index))
    }

    /// Wholesale replacement of the entire sequence.
    ///
    /// Used by load/restore/undo/redo. No validation: callers are trusted
    /// internal paths that parsed or snapshotted the sequence already.
    pub fn replace_all(&mut self, papers: Vec<Paper>) {
        self.papers = papers;
    }

    /// The current sequence, in order. Read-only view, not a copy.
    pub fn all(&self) -> &[Paper] {
        &self.papers
    }

    pub fn get(&self, index: usize) -> Option<&Paper> {
        self.papers.get(index)
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Current position of the paper with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.papers.iter().position(|p| p.id == id)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.id == id)
    }

    /// Replace the paper with the given id wholesale (id is kept).
    pub fn update_by_id(&mut self, id: &str, paper: Paper) -> Result<(), StoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.update(index, paper)
    }

    /// Remove and return the paper with the given id.
    pub fn delete_by_id(&mut self, id: &str) -> Result<Paper, StoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.delete(index)
    }
}
