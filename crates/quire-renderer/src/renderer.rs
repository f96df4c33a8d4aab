//! Document set rendering.
//!
//! [`render`] is a pure function of its inputs: it validates the whole set,
//! then renders every page in parallel. It never touches the filesystem;
//! persisting pages is the caller's job.

use std::collections::BTreeMap;

use quire_content::Document;
use rayon::prelude::*;

use crate::page::{render_index_page, render_page};
use crate::validate::{RenderError, validate_with_index};

/// Configuration shared by every rendered page.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Stylesheet path referenced from every page head. Passed through as is.
    pub stylesheet: String,
    /// Whether an index page is published next to the documents. Footers
    /// targeting the index are broken links without one.
    pub index_page: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stylesheet: "style.css".to_owned(),
            index_page: true,
        }
    }
}

/// Render a document set to a map from slug to page HTML.
///
/// The map holds exactly one entry per document. Rendering the same set
/// twice yields byte-identical pages.
///
/// # Errors
///
/// Returns [`RenderError`] if the set fails validation. Nothing is rendered
/// in that case.
pub fn render(
    documents: &[Document],
    config: &RenderConfig,
) -> Result<BTreeMap<String, String>, RenderError> {
    validate_with_index(documents, config.index_page)?;

    let pages: BTreeMap<String, String> = documents
        .par_iter()
        .map(|doc| (doc.slug.clone(), render_page(doc, &config.stylesheet)))
        .collect();

    tracing::debug!(page_count = pages.len(), "Rendered documents");
    Ok(pages)
}

/// Render the site index page listing every document.
///
/// Expects a set that already passed [`render`] or
/// [`validate`](crate::validate).
pub fn render_index(documents: &[Document], config: &RenderConfig, title: &str) -> String {
    render_index_page(documents, title, &config.stylesheet)
}
