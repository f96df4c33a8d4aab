//! Whole-set document validation.
//!
//! Runs before any page is rendered. Per-document checks and slug uniqueness
//! are done in one pass in document order; link targets are checked in a
//! second pass once every slug is known.

use std::collections::HashSet;

use quire_content::{ContentNode, Document, INDEX_SLUG, LinkTarget};

/// Error returned when a document set cannot be rendered.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Malformed document (empty title, bad slug, malformed content node).
    #[error("Invalid document {slug:?}: {message}")]
    Validation { slug: String, message: String },
    /// Two documents claim the same slug.
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),
    /// A navigation link points at a page that will not exist: a slug not
    /// in the set, or the index page when none is published.
    #[error("Broken link in {from:?}: no page for target {target:?}")]
    BrokenLink { from: String, target: String },
}

/// Validate a document set as a unit, assuming an index page is published.
///
/// # Errors
///
/// Returns the first [`RenderError`] found.
pub fn validate(documents: &[Document]) -> Result<(), RenderError> {
    validate_with_index(documents, true)
}

/// Validate a document set as a unit.
///
/// With `index_page` false, a footer targeting the index is a
/// [`RenderError::BrokenLink`].
///
/// # Errors
///
/// Returns the first [`RenderError`] found.
pub fn validate_with_index(documents: &[Document], index_page: bool) -> Result<(), RenderError> {
    let mut slugs = HashSet::with_capacity(documents.len());
    for doc in documents {
        validate_document(doc)?;
        if !slugs.insert(doc.slug.as_str()) {
            return Err(RenderError::DuplicateSlug(doc.slug.clone()));
        }
    }

    for doc in documents {
        let exists = match &doc.footer.target {
            LinkTarget::Index => index_page,
            LinkTarget::Document(target) => slugs.contains(target.as_str()),
        };
        if !exists {
            return Err(RenderError::BrokenLink {
                from: doc.slug.clone(),
                target: doc.footer.target.slug().to_owned(),
            });
        }
    }

    Ok(())
}

fn validate_document(doc: &Document) -> Result<(), RenderError> {
    let invalid = |message: &str| RenderError::Validation {
        slug: doc.slug.clone(),
        message: message.to_owned(),
    };

    if doc.title.trim().is_empty() {
        return Err(invalid("title cannot be empty"));
    }
    validate_slug(&doc.slug).map_err(|message| invalid(&message))?;

    for (index, node) in doc.content.iter().enumerate() {
        validate_node(node).map_err(|message| invalid(&format!("content[{index}]: {message}")))?;
    }

    if doc.footer.label.trim().is_empty() {
        return Err(invalid("footer label cannot be empty"));
    }

    Ok(())
}

/// Slugs become file names and URL segments, so keep them to a safe set.
fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("slug cannot be empty".to_owned());
    }
    if slug == INDEX_SLUG {
        return Err(format!("slug {INDEX_SLUG:?} is reserved for the index page"));
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(*c, '-' | '_' | '.')))
    {
        return Err(format!("slug contains invalid character {c:?}"));
    }
    if slug.starts_with('.') {
        return Err("slug cannot start with '.'".to_owned());
    }
    Ok(())
}

fn validate_node(node: &ContentNode) -> Result<(), String> {
    match node {
        ContentNode::Heading { text, .. } => {
            if text.trim().is_empty() {
                return Err("heading text cannot be empty".to_owned());
            }
        }
        ContentNode::Paragraph { spans } => {
            if spans.is_empty() {
                return Err("paragraph must contain at least one span".to_owned());
            }
            for span in spans {
                if span.text.is_empty() {
                    return Err("span text cannot be empty".to_owned());
                }
                if span.href.as_deref().is_some_and(str::is_empty) {
                    return Err("link target cannot be empty".to_owned());
                }
            }
        }
        // Code bodies are opaque; even an empty block is authored content.
        ContentNode::CodeBlock { .. } => {}
    }
    Ok(())
}
