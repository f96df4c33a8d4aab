//! Mock sink implementation for testing.
//!
//! Provides [`MockSink`] for unit testing without filesystem access.

use std::collections::{BTreeMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::sink::{PageSink, SinkError, SinkErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock sink for testing.
///
/// Stores written pages in memory. Use the builder methods to make writes
/// for specific slugs fail.
///
/// # Example
///
/// ```ignore
/// use quire_sink::{MockSink, PageSink};
///
/// let sink = MockSink::new().with_failure("broken");
///
/// sink.write("ok", "<p>ok</p>").unwrap();
/// assert!(sink.write("broken", "<p>no</p>").is_err());
/// assert_eq!(sink.page("ok").as_deref(), Some("<p>ok</p>"));
/// ```
#[derive(Debug, Default)]
pub struct MockSink {
    pages: RwLock<BTreeMap<String, String>>,
    failures: RwLock<HashSet<String>>,
    attempts: AtomicUsize,
}

impl MockSink {
    /// Create a new empty mock sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write for `slug` fail with [`SinkErrorKind::Unavailable`].
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, slug: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert(slug.into());
        self
    }

    /// Snapshot of every successfully written page, keyed by slug.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn pages(&self) -> BTreeMap<String, String> {
        self.pages.read().unwrap().clone()
    }

    /// Content written for `slug`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<String> {
        self.pages.read().unwrap().get(slug).cloned()
    }

    /// Number of `write` calls, successful or not.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl PageSink for MockSink {
    fn write(&self, slug: &str, content: &str) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.failures.read().unwrap().contains(slug) {
            return Err(SinkError::new(SinkErrorKind::Unavailable, BACKEND, slug));
        }

        self.pages
            .write()
            .unwrap()
            .insert(slug.to_owned(), content.to_owned());
        Ok(())
    }
}
