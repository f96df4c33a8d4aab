//! Document model.
//!
//! A [`Document`] is one article page: a title, a slug, an ordered list of
//! [`ContentNode`]s and a single footer [`NavLink`]. Documents are immutable
//! once loaded; the renderer only reads them.

use serde::Deserialize;

/// Reserved link target naming the site index page.
pub const INDEX_SLUG: &str = "index";

/// Extension of every published page file. Links and sinks both use it.
pub const PAGE_EXTENSION: &str = "html";

/// One authored article page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Page title, also rendered as the top-level heading.
    pub title: String,
    /// Unique identifier used for the output filename and inbound links.
    pub slug: String,
    /// Body nodes in authored order.
    #[serde(default)]
    pub content: Vec<ContentNode>,
    /// Back-navigation link shown in the page footer.
    #[serde(default)]
    pub footer: NavLink,
}

impl Document {
    /// Create a document with no content and the default footer link.
    #[must_use]
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            content: Vec::new(),
            footer: NavLink::default(),
        }
    }

    /// Append a content node.
    #[must_use]
    pub fn with_node(mut self, node: ContentNode) -> Self {
        self.content.push(node);
        self
    }

    /// Replace the footer link.
    #[must_use]
    pub fn with_footer(mut self, footer: NavLink) -> Self {
        self.footer = footer;
        self
    }
}

/// Heading level allowed inside a document body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    /// Numeric level (1 or 2).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            other => Err(format!("heading level must be 1 or 2, got {other}")),
        }
    }
}

/// Structural unit of a document body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    /// Section heading.
    Heading { level: HeadingLevel, text: String },
    /// Prose block made of inline spans.
    Paragraph { spans: Vec<Span> },
    /// Literal code text shown in a preformatted block.
    ///
    /// `language` is a display label only. `body` is opaque and kept
    /// byte-for-byte, including whitespace and line breaks.
    CodeBlock {
        #[serde(default)]
        language: String,
        body: String,
    },
}

impl ContentNode {
    #[must_use]
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn paragraph(spans: impl IntoIterator<Item = Span>) -> Self {
        Self::Paragraph {
            spans: spans.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn code_block(language: impl Into<String>, body: impl Into<String>) -> Self {
        Self::CodeBlock {
            language: language.into(),
            body: body.into(),
        }
    }
}

/// Inline run of paragraph text, optionally a hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Span {
    pub text: String,
    /// Link target, passed through to the output unmodified.
    #[serde(default)]
    pub href: Option<String>,
}

impl Span {
    /// Plain text span.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: None,
        }
    }

    /// Hyperlink span.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: Some(href.into()),
        }
    }
}

/// Target of a navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum LinkTarget {
    /// The site index page.
    Index,
    /// Another document, by slug.
    Document(String),
}

impl From<String> for LinkTarget {
    fn from(target: String) -> Self {
        if target == INDEX_SLUG {
            Self::Index
        } else {
            Self::Document(target)
        }
    }
}

impl From<&str> for LinkTarget {
    fn from(target: &str) -> Self {
        Self::from(target.to_owned())
    }
}

impl LinkTarget {
    /// Slug this target points at (`index` for the index page).
    #[must_use]
    pub fn slug(&self) -> &str {
        match self {
            Self::Index => INDEX_SLUG,
            Self::Document(slug) => slug,
        }
    }
}

/// Labelled link from a document to another page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: LinkTarget,
}

impl NavLink {
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<LinkTarget>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl Default for NavLink {
    fn default() -> Self {
        Self {
            label: "Back to index".to_owned(),
            target: LinkTarget::Index,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = Document::new("Title", "title")
            .with_node(ContentNode::heading(HeadingLevel::H2, "Intro"))
            .with_node(ContentNode::code_block("csharp", "var x = 1;"));

        assert_eq!(doc.title, "Title");
        assert_eq!(doc.slug, "title");
        assert_eq!(doc.content.len(), 2);
        assert_eq!(doc.footer, NavLink::default());
    }

    #[test]
    fn test_default_footer_targets_index() {
        let footer = NavLink::default();

        assert_eq!(footer.label, "Back to index");
        assert_eq!(footer.target, LinkTarget::Index);
    }

    #[test]
    fn test_link_target_from_index_sentinel() {
        assert_eq!(LinkTarget::from("index"), LinkTarget::Index);
        assert_eq!(
            LinkTarget::from("guide"),
            LinkTarget::Document("guide".to_owned())
        );
    }

    #[test]
    fn test_link_target_slug() {
        assert_eq!(LinkTarget::Index.slug(), "index");
        assert_eq!(LinkTarget::Document("faq".to_owned()).slug(), "faq");
    }

    #[test]
    fn test_heading_level_try_from() {
        assert_eq!(HeadingLevel::try_from(1), Ok(HeadingLevel::H1));
        assert_eq!(HeadingLevel::try_from(2), Ok(HeadingLevel::H2));
        assert!(HeadingLevel::try_from(3).is_err());
        assert!(HeadingLevel::try_from(0).is_err());
    }

    #[test]
    fn test_heading_level_as_u8() {
        assert_eq!(HeadingLevel::H1.as_u8(), 1);
        assert_eq!(HeadingLevel::H2.as_u8(), 2);
    }

    #[test]
    fn test_span_constructors() {
        assert_eq!(Span::text("plain").href, None);
        assert_eq!(
            Span::link("docs", "https://example.com").href.as_deref(),
            Some("https://example.com")
        );
    }
}
