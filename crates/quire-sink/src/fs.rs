//! Filesystem page sink.
//!
//! Provides [`FsSink`] for writing rendered pages into an output directory
//! as `{slug}.html`.

use std::fs;
use std::path::{Path, PathBuf};

use quire_content::PAGE_EXTENSION;

use crate::sink::{PageSink, SinkError, SinkErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem sink.
///
/// Writes each page to `{output_dir}/{slug}.html`, creating the output
/// directory on first write. Existing files are overwritten. The extension
/// is the one page links are built with, so every link resolves.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use quire_sink::{FsSink, PageSink};
///
/// let sink = FsSink::new(PathBuf::from("public"));
/// sink.write("hello", "<!DOCTYPE html>...")?;
/// ```
#[derive(Debug)]
pub struct FsSink {
    output_dir: PathBuf,
}

impl FsSink {
    /// Create a sink writing pages into `output_dir`.
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination file for a slug.
    ///
    /// Returns `None` for slugs that would escape the output directory.
    #[must_use]
    pub fn page_path(&self, slug: &str) -> Option<PathBuf> {
        is_safe_slug(slug).then(|| self.output_dir.join(format!("{slug}.{PAGE_EXTENSION}")))
    }
}

/// A slug must map to a single file name directly inside the output directory.
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}

impl PageSink for FsSink {
    fn write(&self, slug: &str, content: &str) -> Result<(), SinkError> {
        let path = self
            .page_path(slug)
            .ok_or_else(|| SinkError::new(SinkErrorKind::InvalidSlug, BACKEND, slug))?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| SinkError::io(e, BACKEND, slug, &self.output_dir))?;
        fs::write(&path, content).map_err(|e| SinkError::io(e, BACKEND, slug, &path))?;

        tracing::debug!(slug, path = %path.display(), bytes = content.len(), "Wrote page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_fs_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FsSink>();
    }

    #[test]
    fn test_write_creates_html_file() {
        let temp = create_test_dir();
        let sink = FsSink::new(temp.path().to_path_buf());

        sink.write("post", "<p>Hello</p>").unwrap();

        let written = fs::read_to_string(temp.path().join("post.html")).unwrap();
        assert_eq!(written, "<p>Hello</p>");
    }

    #[test]
    fn test_write_creates_output_dir() {
        let temp = create_test_dir();
        let output_dir = temp.path().join("public/blog");
        let sink = FsSink::new(output_dir.clone());

        sink.write("index", "<ul></ul>").unwrap();

        assert!(output_dir.join("index.html").is_file());
    }

    #[test]
    fn test_write_overwrites_existing_page() {
        let temp = create_test_dir();
        let sink = FsSink::new(temp.path().to_path_buf());

        sink.write("post", "old").unwrap();
        sink.write("post", "new").unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("post.html")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_write_keeps_content_bytes() {
        let temp = create_test_dir();
        let sink = FsSink::new(temp.path().to_path_buf());
        let content = "line one\r\n\tline two\n  \n";

        sink.write("post", content).unwrap();

        assert_eq!(
            fs::read(temp.path().join("post.html")).unwrap(),
            content.as_bytes()
        );
    }

    #[test]
    fn test_write_rejects_traversal_slug() {
        let temp = create_test_dir();
        let sink = FsSink::new(temp.path().join("out"));

        for slug in ["../escape", "a/b", "a\\b", "..", ""] {
            let err = sink.write(slug, "x").unwrap_err();
            assert_eq!(err.kind, SinkErrorKind::InvalidSlug, "slug {slug:?}");
            assert_eq!(err.slug, slug);
            assert!(err.path.is_none());
        }
        assert!(!temp.path().join("escape.html").exists());
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp = create_test_dir();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let sink = FsSink::new(blocker);

        let err = sink.write("post", "x").unwrap_err();

        assert_eq!(err.slug, "post");
        assert_eq!(err.backend, "Fs");
        assert!(err.to_string().starts_with("[Fs] page \"post\""));
    }

    #[test]
    fn test_page_path() {
        let sink = FsSink::new(PathBuf::from("/out"));

        assert_eq!(sink.page_path("post"), Some(PathBuf::from("/out/post.html")));
        assert_eq!(sink.page_path("index"), Some(PathBuf::from("/out/index.html")));
        assert_eq!(sink.page_path("../post"), None);
        assert_eq!(sink.output_dir(), Path::new("/out"));
    }
}
