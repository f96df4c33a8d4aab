//! Terminal reporting for `build` and `check` runs.
//!
//! Lines are formatted by plain functions and only coloured on the way out,
//! so the wording is testable without a terminal.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use quire_content::PAGE_EXTENSION;
use quire_site::BuildReport;
use quire_sink::SinkError;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    /// Print where documents are read from and pages written to.
    pub(crate) fn directories(&self, source_dir: &Path, output_dir: Option<&Path>) {
        self.line(&self.dim, &format!("Content: {}", source_dir.display()));
        if let Some(dir) = output_dir {
            self.line(&self.dim, &format!("Pages:   {}", dir.display()));
        }
    }

    /// Print one line per attempted page, then the build summary.
    pub(crate) fn build_report(&self, report: &BuildReport, output_dir: &Path) {
        for (slug, result) in report.results() {
            let style = if result.is_ok() { &self.green } else { &self.red };
            self.line(style, &page_line(slug, result.as_ref().err()));
        }

        let failed: Vec<&str> = report.failed().map(|(slug, _)| slug).collect();
        let style = if failed.is_empty() { &self.green } else { &self.red };
        self.line(style, &build_summary(report.len(), &failed, output_dir));
    }

    /// Print the result of a successful `check`.
    pub(crate) fn check_passed(&self, documents: usize, index_page: bool) {
        self.line(&self.green, &check_summary(documents, index_page));
    }

    /// Print a fatal error (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&self.red, &format!("Error: {err}"));
    }
}

/// Status line for one page: `  ok    post.html` or `  fail  post.html: ...`.
fn page_line(slug: &str, error: Option<&SinkError>) -> String {
    match error {
        None => format!("  ok    {slug}.{PAGE_EXTENSION}"),
        Some(err) => format!("  fail  {slug}.{PAGE_EXTENSION}: {}", err.kind),
    }
}

fn build_summary(total: usize, failed: &[&str], output_dir: &Path) -> String {
    let dir = output_dir.display();
    if failed.is_empty() {
        return format!("Built {total} {} in {dir}", pages(total));
    }
    format!(
        "Wrote {} of {total} {} in {dir}; failed: {}",
        total - failed.len(),
        pages(total),
        failed.join(", ")
    )
}

fn check_summary(documents: usize, index_page: bool) -> String {
    let noun = if documents == 1 { "document" } else { "documents" };
    if index_page {
        format!("{documents} {noun} valid, index page enabled")
    } else {
        format!("{documents} {noun} valid, no index page")
    }
}

fn pages(count: usize) -> &'static str {
    if count == 1 { "page" } else { "pages" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quire_sink::SinkErrorKind;

    use super::*;

    #[test]
    fn test_page_line_written() {
        assert_eq!(page_line("post", None), "  ok    post.html");
    }

    #[test]
    fn test_page_line_failed() {
        let err = SinkError::new(SinkErrorKind::PermissionDenied, "Fs", "post");

        assert_eq!(
            page_line("post", Some(&err)),
            "  fail  post.html: permission denied"
        );
    }

    #[test]
    fn test_build_summary_success() {
        assert_eq!(
            build_summary(3, &[], Path::new("public")),
            "Built 3 pages in public"
        );
        assert_eq!(
            build_summary(1, &[], Path::new("public")),
            "Built 1 page in public"
        );
    }

    #[test]
    fn test_build_summary_lists_failed_slugs() {
        assert_eq!(
            build_summary(3, &["first", "index"], Path::new("public")),
            "Wrote 1 of 3 pages in public; failed: first, index"
        );
    }

    #[test]
    fn test_check_summary() {
        assert_eq!(check_summary(2, true), "2 documents valid, index page enabled");
        assert_eq!(check_summary(1, false), "1 document valid, no index page");
    }
}
