//! Domain types for personal bibliography curation
//!
//! This crate provides the canonical record model shared by the biblio crates:
//! - Paper: one bibliography entry with its fields
//! - List-field parsing for comma-separated category/tag input
//! - Validation of required fields

pub mod paper;
pub mod parse;
pub mod validation;

pub use paper::*;
pub use parse::*;
pub use validation::*;
