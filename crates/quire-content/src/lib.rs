//! Document model and authoring format for Quire.
//!
//! A site is a set of [`Document`]s. Each document holds an ordered list of
//! [`ContentNode`]s (headings, paragraphs, code blocks) and one footer
//! [`NavLink`] pointing back to the index or another document.
//!
//! Documents are authored as one TOML file each and loaded with
//! [`load_documents`]:
//!
//! ```ignore
//! use std::path::Path;
//! use quire_content::load_documents;
//!
//! let documents = load_documents(Path::new("content"))?;
//! for doc in &documents {
//!     println!("{}: {}", doc.slug, doc.title);
//! }
//! ```

mod document;
mod loader;

pub use document::{
    ContentNode, Document, HeadingLevel, INDEX_SLUG, LinkTarget, NavLink, PAGE_EXTENSION, Span,
};
pub use loader::{LoadError, load_documents, parse_document};
