//! Paper domain model

use serde::{Deserialize, Serialize};

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A single bibliography entry.
///
/// `title`, `authors`, and `year` are required (non-empty) at creation time;
/// see [`crate::validation::validate_paper`]. `year` is kept as text because
/// it comes from free-form input, but it must parse as an integer for the
/// statistics view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    /// Surrogate identifier assigned at creation. Selection state resolves
    /// to this id, never to a list position. Not persisted: a fresh id is
    /// minted whenever a paper is deserialized.
    #[serde(skip, default = "fresh_id")]
    pub id: String,
    pub title: String,
    pub authors: String,
    pub year: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub notes: String,
}

impl Paper {
    /// Create a new paper with the required fields
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            title: title.into(),
            authors: authors.into(),
            year: year.into(),
            doi: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            summary: String::new(),
            notes: String::new(),
        }
    }

    /// Set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = doi.into();
        self
    }

    /// Set the categories
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// The year as a number, if it parses.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// Categories joined with `", "`, the rendering used by list views,
    /// CSV and LaTeX export, and advanced search.
    pub fn categories_joined(&self) -> String {
        self.categories.join(", ")
    }

    /// Tags joined with `", "`.
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    /// Resolve the DOI to the URL the shell should open, if a DOI is set.
    pub fn doi_url(&self) -> Option<String> {
        let doi = self.doi.trim();
        if doi.is_empty() {
            None
        } else {
            Some(format!("https://doi.org/{}", doi))
        }
    }
}
