//! LaTeX export
//!
//! One `\section*` block per paper with bold-labeled field lines. Field
//! values are emitted verbatim: LaTeX special characters in user text are
//! not escaped, so a title containing `&` or `_` needs hand-editing in the
//! output.

use crate::error::{IoError, IoResult};
use biblio_domain::Paper;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Render the collection as a standalone LaTeX document.
pub fn render_latex(papers: &[Paper]) -> String {
    let mut out = String::new();
    out.push_str("\\documentclass{article}\n\\begin{document}\n\\title{Literature Review}\n\\maketitle\n");
    for paper in papers {
        let _ = writeln!(out, "\\section*{{{}}}", paper.title);
        let _ = writeln!(out, "\\textbf{{Authors:}} {} \\\\ ", paper.authors);
        let _ = writeln!(out, "\\textbf{{Year:}} {} \\\\ ", paper.year);
        let _ = writeln!(out, "\\textbf{{DOI:}} {} \\\\ ", paper.doi);
        let _ = writeln!(
            out,
            "\\textbf{{Categories:}} {} \\\\ ",
            paper.categories_joined()
        );
        let _ = writeln!(out, "\\textbf{{Tags:}} {} \\\\ ", paper.tags_joined());
        let _ = writeln!(out, "\\textbf{{Summary:}} \n{} \\\\ ", paper.summary);
        let _ = writeln!(out, "\\textbf{{Notes:}} \n{} \\\\ ", paper.notes);
    }
    out.push_str("\\end{document}");
    out
}

/// Export the collection to a LaTeX file.
pub fn export_latex(path: &Path, papers: &[Paper]) -> IoResult<()> {
    fs::write(path, render_latex(papers))
        .map_err(|e| IoError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    tracing::info!(count = papers.len(), path = %path.display(), "exported LaTeX");
    Ok(())
}
