//! Static site builder.
//!
//! [`SiteBuilder::build`] validates and renders the whole document set first
//! and only then hands pages to the [`PageSink`]. A validation failure means
//! nothing is written; a write failure for one page never stops the others.

use std::collections::BTreeMap;
use std::sync::Arc;

use quire_content::{Document, INDEX_SLUG};
use quire_renderer::{RenderConfig, RenderError, render, render_index, validate_with_index};
use quire_sink::{PageSink, SinkError};
use rayon::prelude::*;

/// Index page settings.
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// Title of the index page.
    pub title: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Index".to_owned(),
        }
    }
}

/// Configuration for site building.
#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    /// Settings shared by every rendered page. `index_page` is derived from
    /// `index` and ignored here.
    pub render: RenderConfig,
    /// Index page settings. `None` skips the index page, and footers
    /// targeting it then fail validation.
    pub index: Option<IndexConfig>,
}

/// Outcome of writing every rendered page.
#[derive(Debug, Default)]
pub struct BuildReport {
    results: BTreeMap<String, Result<(), SinkError>>,
}

impl BuildReport {
    /// Number of pages attempted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no page was attempted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether every page was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.results.values().all(Result::is_ok)
    }

    /// Write result for one slug, if it was attempted.
    #[must_use]
    pub fn result(&self, slug: &str) -> Option<&Result<(), SinkError>> {
        self.results.get(slug)
    }

    /// Every attempted slug with its write result, in slug order.
    pub fn results(&self) -> impl Iterator<Item = (&str, &Result<(), SinkError>)> {
        self.results
            .iter()
            .map(|(slug, result)| (slug.as_str(), result))
    }

    /// Slugs written successfully, in slug order.
    pub fn written(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, result)| result.is_ok())
            .map(|(slug, _)| slug.as_str())
    }

    /// Failed slugs with their sink errors, in slug order.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &SinkError)> {
        self.results
            .iter()
            .filter_map(|(slug, result)| result.as_ref().err().map(|e| (slug.as_str(), e)))
    }

    /// Consume the report, returning the per-slug results.
    #[must_use]
    pub fn into_results(self) -> BTreeMap<String, Result<(), SinkError>> {
        self.results
    }
}

/// Builds a static site from a document set into a page sink.
pub struct SiteBuilder {
    sink: Arc<dyn PageSink>,
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(sink: Arc<dyn PageSink>, config: BuildConfig) -> Self {
        Self { sink, config }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            index_page: self.config.index.is_some(),
            ..self.config.render.clone()
        }
    }

    /// Validate the document set without rendering or writing anything.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError`] found.
    pub fn check(&self, documents: &[Document]) -> Result<(), RenderError> {
        validate_with_index(documents, self.config.index.is_some())
    }

    /// Render every document (and the index page, if enabled) and write
    /// each page to the sink exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if validation fails; the sink is not called.
    /// Sink failures are reported per slug in the [`BuildReport`].
    pub fn build(&self, documents: &[Document]) -> Result<BuildReport, RenderError> {
        let render_config = self.render_config();
        let mut pages = render(documents, &render_config)?;
        if let Some(index) = &self.config.index {
            pages.insert(
                INDEX_SLUG.to_owned(),
                render_index(documents, &render_config, &index.title),
            );
        }

        let results: BTreeMap<String, Result<(), SinkError>> = pages
            .par_iter()
            .map(|(slug, html)| {
                let result = self.sink.write(slug, html);
                if let Err(e) = &result {
                    tracing::warn!(slug = %slug, error = %e, "Failed to write page");
                }
                (slug.clone(), result)
            })
            .collect();

        let report = BuildReport { results };
        tracing::info!(
            documents = documents.len(),
            pages = report.len(),
            failed = report.failed().count(),
            "Site build completed"
        );
        Ok(report)
    }
}
