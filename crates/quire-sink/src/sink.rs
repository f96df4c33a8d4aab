//! Page sink trait and error types.
//!
//! Provides the core [`PageSink`] trait for persisting rendered pages, along
//! with [`SinkError`] describing a failed page write.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a page write failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SinkErrorKind {
    /// Destination directory does not exist and cannot be created.
    NotFound,
    /// Destination is not writable.
    PermissionDenied,
    /// Slug does not map to a destination inside the sink.
    InvalidSlug,
    /// Backend refused the write.
    Unavailable,
    /// Any other backend failure.
    Other,
}

impl fmt::Display for SinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotFound => "destination not found",
            Self::PermissionDenied => "permission denied",
            Self::InvalidSlug => "slug is not a valid page name",
            Self::Unavailable => "sink unavailable",
            Self::Other => "write failed",
        })
    }
}

impl From<std::io::ErrorKind> for SinkErrorKind {
    fn from(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}

/// A page that could not be written.
///
/// Every error names the page (`slug`) and the sink (`backend`) it came from,
/// so a build report can list failures without extra bookkeeping.
#[derive(Debug)]
pub struct SinkError {
    pub kind: SinkErrorKind,
    /// Slug of the page being written.
    pub slug: String,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: &'static str,
    /// Destination the backend tried to write, when it has one.
    pub path: Option<PathBuf>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SinkError {
    #[must_use]
    pub fn new(kind: SinkErrorKind, backend: &'static str, slug: impl Into<String>) -> Self {
        Self {
            kind,
            slug: slug.into(),
            backend,
            path: None,
            source: None,
        }
    }

    /// Attach the destination path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the underlying error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Failed I/O while writing `slug` to `path`.
    #[must_use]
    pub fn io(err: std::io::Error, backend: &'static str, slug: &str, path: &Path) -> Self {
        Self::new(err.kind().into(), backend, slug)
            .with_path(path)
            .with_source(err)
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // [Fs] page "post": permission denied (/out/post.html): access denied
        write!(f, "[{}] page {:?}: {}", self.backend, self.slug, self.kind)?;
        if let Some(path) = &self.path {
            write!(f, " ({})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Destination for rendered pages.
///
/// The renderer never performs I/O; callers hand each rendered page to a
/// sink. Implementations must tolerate concurrent `write` calls for
/// different slugs.
pub trait PageSink: Send + Sync {
    /// Persist one rendered page under its slug.
    ///
    /// # Arguments
    ///
    /// * `slug` - Document slug (e.g., "cleaning-up-sql-access", "index")
    /// * `content` - Complete rendered page
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the page cannot be persisted. A failure for
    /// one slug says nothing about other slugs.
    fn write(&self, slug: &str, content: &str) -> Result<(), SinkError>;
}
