//! Collection state for personal bibliography curation
//!
//! Three cooperating pieces, all operating on one in-memory collection:
//! - [`PaperStore`]: the authoritative ordered sequence of papers
//! - [`HistoryLog`]: snapshot-based linear undo/redo over the whole collection
//! - [`LiveFilter`] / [`AdvancedQuery`]: predicate evaluation for the list view
//!
//! [`Workspace`] owns a store and a history log and wires mutations to
//! snapshots, so a shell never has to coordinate the two by hand.

pub mod history;
pub mod query;
pub mod stats;
pub mod store;
pub mod workspace;

pub use history::HistoryLog;
pub use query::{known_categories, known_tags, AdvancedQuery, LiveFilter};
pub use stats::CollectionStats;
pub use store::{PaperStore, StoreError};
pub use workspace::Workspace;
