//! Persistence and export for personal bibliography collections
//!
//! - JSON library files (manual save/load, backup/restore, startup autosave)
//! - CSV export
//! - LaTeX export
//!
//! Everything here is synchronous, whole-file I/O: collections are
//! user-sized, so each operation reads or writes one small file and returns.
//! Path selection (save dialogs, file pickers) belongs to the shell; these
//! functions take the chosen path.

pub mod config;
pub mod csv_export;
pub mod error;
pub mod latex_export;
pub mod persistence;

pub use config::PersistConfig;
pub use csv_export::{export_csv, render_csv};
pub use error::{IoError, IoResult};
pub use latex_export::{export_latex, render_latex};
pub use persistence::{load_autosave, load_papers, save_papers, write_autosave};
