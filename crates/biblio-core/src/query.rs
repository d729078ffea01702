//! Filter and search evaluation
//!
//! Two entry points with deliberately different matching semantics:
//!
//! - [`LiveFilter`] drives the always-active search bar plus the
//!   category/tag dropdowns. Category and tag match exact elements.
//! - [`AdvancedQuery`] is the multi-field search dialog. Category and tag
//!   match as substrings of the `", "`-joined rendering of the whole
//!   sequence, so a needle may span two adjacent entries at the join.
//!
//! Both AND their predicates, treat an empty input as always-true, and
//! preserve collection order in their results. No ranking, no pagination.

use biblio_domain::Paper;
use std::collections::BTreeSet;

/// The always-active search/category/tag bar over the main list view.
#[derive(Debug, Clone, Default)]
pub struct LiveFilter {
    /// Free-text query, matched case-insensitively against title and
    /// authors, and literally against the year string.
    pub text: String,
    /// Exact category element to require, empty for no constraint.
    pub category: String,
    /// Exact tag element to require, empty for no constraint.
    pub tag: String,
}

impl LiveFilter {
    /// Whether this filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.category.is_empty() && self.tag.is_empty()
    }

    pub fn matches(&self, paper: &Paper) -> bool {
        let needle = self.text.to_lowercase();
        let text_ok = paper.title.to_lowercase().contains(&needle)
            || paper.authors.to_lowercase().contains(&needle)
            || paper.year.contains(&needle);
        let category_ok =
            self.category.is_empty() || paper.categories.iter().any(|c| *c == self.category);
        let tag_ok = self.tag.is_empty() || paper.tags.iter().any(|t| *t == self.tag);
        text_ok && category_ok && tag_ok
    }

    /// Matching papers, in collection order.
    pub fn apply<'a>(&self, papers: &'a [Paper]) -> Vec<&'a Paper> {
        papers.iter().filter(|p| self.matches(p)).collect()
    }
}

/// The multi-field advanced search dialog.
#[derive(Debug, Clone, Default)]
pub struct AdvancedQuery {
    pub title: String,
    pub authors: String,
    /// Substring of the year string, matched case-sensitively; a partial
    /// year like "202" matches "2021".
    pub year: String,
    pub category: String,
    pub tag: String,
}

impl AdvancedQuery {
    /// Whether this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.year.is_empty()
            && self.category.is_empty()
            && self.tag.is_empty()
    }

    pub fn matches(&self, paper: &Paper) -> bool {
        paper
            .title
            .to_lowercase()
            .contains(&self.title.to_lowercase())
            && paper
                .authors
                .to_lowercase()
                .contains(&self.authors.to_lowercase())
            && paper.year.contains(&self.year)
            && paper
                .categories_joined()
                .to_lowercase()
                .contains(&self.category.to_lowercase())
            && paper
                .tags_joined()
                .to_lowercase()
                .contains(&self.tag.to_lowercase())
    }

    /// Matching papers, in collection order.
    pub fn apply<'a>(&self, papers: &'a [Paper]) -> Vec<&'a Paper> {
        papers.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Sorted, deduplicated category values, for filter dropdown population.
pub fn known_categories(papers: &[Paper]) -> Vec<String> {
    papers
        .iter()
        .flat_map(|p| p.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated tag values, for filter dropdown population.
pub fn known_tags(papers: &[Paper]) -> Vec<String> {
    papers
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Paper> {
        vec![
            Paper::new("Deep Learning", "A. Lee", "2021")
                .with_categories(vec!["ML".to_string()])
                .with_tags(vec!["nn".to_string()]),
            Paper::new("Galaxy Surveys", "B. Chen", "2019")
                .with_categories(vec!["Astro".to_string(), "ML".to_string()])
                .with_tags(vec!["obs".to_string()]),
        ]
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let papers = sample();
        let filter = LiveFilter::default();
        assert!(filter.is_empty());
        let hits = filter.apply(&papers);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Deep Learning");
        assert_eq!(hits[1].title, "Galaxy Surveys");
    }

    #[test]
    fn text_matches_title_case_insensitively() {
        let papers = sample();
        let filter = LiveFilter {
            text: "deep".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&papers);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Deep Learning");
    }

    #[test]
    fn text_matches_year_literally() {
        let papers = sample();
        let hit = LiveFilter {
            text: "2021".to_string(),
            ..Default::default()
        };
        assert_eq!(hit.apply(&papers).len(), 1);

        let miss = LiveFilter {
            text: "2022".to_string(),
            ..Default::default()
        };
        assert!(miss.apply(&papers).is_empty());
    }

    #[test]
    fn category_is_exact_element_not_substring() {
        let paper = Paper::new("T", "A", "2021")
            .with_categories(vec!["Machine Learning".to_string()]);
        let filter = LiveFilter {
            category: "Learning".to_string(),
            ..Default::default()
        };
        assert!(!filter.matches(&paper));

        let exact = LiveFilter {
            category: "Machine Learning".to_string(),
            ..Default::default()
        };
        assert!(exact.matches(&paper));
    }

    #[test]
    fn advanced_tag_matches_across_join_boundary() {
        let paper = Paper::new("T", "A", "2021")
            .with_tags(vec!["nn".to_string(), "cv".to_string()]);
        let query = AdvancedQuery {
            tag: "n, c".to_string(),
            ..Default::default()
        };
        assert!(query.matches(&paper));
    }

    #[test]
    fn advanced_year_is_substring_not_equality() {
        let paper = Paper::new("T", "A", "2021");
        let partial = AdvancedQuery {
            year: "202".to_string(),
            ..Default::default()
        };
        assert!(partial.matches(&paper));
    }

    #[test]
    fn known_values_are_sorted_and_deduplicated() {
        let papers = sample();
        assert_eq!(known_categories(&papers), vec!["Astro", "ML"]);
        assert_eq!(known_tags(&papers), vec!["nn", "obs"]);
    }
}
