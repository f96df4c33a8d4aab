//! Static document renderer.
//!
//! Turns a set of [`Document`](quire_content::Document)s into standalone
//! HTML pages:
//!
//! - [`validate`] checks the whole set up front (titles, slugs, content
//!   nodes, footer link targets); [`validate_with_index`] also rejects
//!   index links when no index page is published
//! - [`render`] produces one page per document, keyed by slug
//! - [`render_index`] produces the index page the `index` link target points at
//!
//! Rendering is pure. Code block bodies are escaped with [`escape_html`] and
//! otherwise kept byte-for-byte.
//!
//! # Example
//!
//! ```
//! use quire_content::{ContentNode, Document};
//! use quire_renderer::{RenderConfig, render};
//!
//! let docs = vec![
//!     Document::new("Hello", "hello").with_node(ContentNode::code_block("csharp", "var x = 1;")),
//! ];
//! let pages = render(&docs, &RenderConfig::default()).unwrap();
//! assert!(pages["hello"].contains("<h1>Hello</h1>"));
//! ```

mod escape;
mod page;
mod renderer;
mod validate;

pub use escape::escape_html;
pub use page::page_href;
pub use quire_content::PAGE_EXTENSION;
pub use renderer::{RenderConfig, render, render_index};
pub use validate::{RenderError, validate, validate_with_index};
