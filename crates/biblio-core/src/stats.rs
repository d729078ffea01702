//! Aggregate statistics over the collection

use biblio_domain::Paper;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Counts over the whole collection: total papers plus year, category, and
/// tag distributions.
///
/// Distributions are keyed in sorted order so rendering is deterministic.
/// Duplicate category/tag entries within one paper count multiply, as
/// entered. Papers whose year does not parse as an integer are skipped from
/// the year distribution and counted in `unparsed_years` instead of failing
/// the whole computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub unparsed_years: usize,
    pub years: BTreeMap<i32, usize>,
    pub categories: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
}

impl CollectionStats {
    /// Compute statistics from the current collection.
    pub fn from_papers(papers: &[Paper]) -> Self {
        let mut years = BTreeMap::new();
        let mut categories = BTreeMap::new();
        let mut tags = BTreeMap::new();
        let mut unparsed_years = 0;

        for paper in papers {
            match paper.year_number() {
                Some(year) => *years.entry(year).or_insert(0) += 1,
                None => unparsed_years += 1,
            }
            for category in &paper.categories {
                *categories.entry(category.clone()).or_insert(0) += 1;
            }
            for tag in &paper.tags {
                *tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        Self {
            total: papers.len(),
            unparsed_years,
            years,
            categories,
            tags,
        }
    }

    /// The text block shown by the statistics view.
    pub fn render(&self) -> String {
        if self.total == 0 {
            return "No papers available.".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Total Papers: {}", self.total);
        let _ = writeln!(out, "Year Distribution:");
        for (year, count) in &self.years {
            let _ = writeln!(out, "{}: {}", year, count);
        }
        if self.unparsed_years > 0 {
            let _ = writeln!(out, "(unparsed years: {})", self.unparsed_years);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Category Distribution:");
        for (category, count) in &self.categories {
            let _ = writeln!(out, "{}: {}", category, count);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Tag Distribution:");
        for (tag, count) in &self.tags {
            let _ = writeln!(out, "{}: {}", tag, count);
        }
        out.trim_end().to_string()
    }
}
