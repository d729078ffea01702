//! Validation for papers

use super::Paper;
use serde::{Deserialize, Serialize};

/// Severity of a validation finding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

/// Validate a paper and return errors/warnings.
///
/// `title`, `authors`, and `year` are required. A year that does not parse
/// as an integer is a warning: the paper can still be stored, but the
/// statistics view will count it as unparsed.
pub fn validate_paper(paper: &Paper) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if paper.title.trim().is_empty() {
        errors.push(ValidationError {
            field: "title".to_string(),
            message: "Title is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if paper.authors.trim().is_empty() {
        errors.push(ValidationError {
            field: "authors".to_string(),
            message: "Authors are required".to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    if paper.year.trim().is_empty() {
        errors.push(ValidationError {
            field: "year".to_string(),
            message: "Year is required".to_string(),
            severity: ValidationSeverity::Error,
        });
    } else if paper.year_number().is_none() {
        errors.push(ValidationError {
            field: "year".to_string(),
            message: "Year is not a number".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    if !paper.doi.is_empty() && !paper.doi.starts_with("10.") {
        errors.push(ValidationError {
            field: "doi".to_string(),
            message: "DOI should start with '10.'".to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    errors
}

/// Check if a paper is valid (no errors; warnings are allowed)
pub fn is_valid(paper: &Paper) -> bool {
    validate_paper(paper)
        .iter()
        .all(|e| e.severity != ValidationSeverity::Error)
}
