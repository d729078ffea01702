//! Snapshot-based linear undo/redo
//!
//! Every mutation stores a deep copy of the whole collection, tagged with a
//! human-readable action label. Two stacks give single-level-back,
//! single-level-forward navigation with no branching: a new mutation clears
//! the redo stack. Stacks are unbounded; acceptable at user scale (low
//! thousands of records), a scaling limitation beyond that.

use biblio_domain::Paper;

/// One saved collection state, tagged with the action that replaced it.
#[derive(Debug, Clone)]
struct Snapshot {
    papers: Vec<Paper>,
    label: String,
}

/// Undo/redo log over full-collection snapshots.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-mutation state. Call BEFORE the store is mutated.
    ///
    /// Clears the redo stack: a new forward action invalidates any redo
    /// history.
    pub fn record(&mut self, current: &[Paper], label: impl Into<String>) {
        self.undo_stack.push(Snapshot {
            papers: current.to_vec(),
            label: label.into(),
        });
        self.redo_stack.clear();
    }

    /// Step back one mutation.
    ///
    /// Pops the most recent snapshot, files `current` on the redo stack
    /// under the same label, and returns the snapshot for the store to
    /// adopt. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &[Paper]) -> Option<Vec<Paper>> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(Snapshot {
            papers: current.to_vec(),
            label: snapshot.label.clone(),
        });
        Some(snapshot.papers)
    }

    /// Step forward one undone mutation. Symmetric to [`HistoryLog::undo`].
    pub fn redo(&mut self, current: &[Paper]) -> Option<Vec<Paper>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(Snapshot {
            papers: current.to_vec(),
            label: snapshot.label.clone(),
        });
        Some(snapshot.papers)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label of the action an undo would revert.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|s| s.label.as_str())
    }

    /// Label of the action a redo would reapply.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|s| s.label.as_str())
    }
}
